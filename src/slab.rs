use std::mem;
use std::ops::{Index, IndexMut};

#[cfg(test)]
use static_assertions::const_assert_eq;

/// An index into a slab, or "null"
///
/// This type is essentially `Option<usize>`. The value usize::MAX is
/// reserved to represent `None` or "null".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Ptr(usize);

// Every node stores three of these, so keep them as small as a plain index
#[cfg(test)]
const_assert_eq!(mem::size_of::<Ptr>(), mem::size_of::<usize>());
// Using `Option<usize>` directly would use more space.
#[cfg(test)]
const_assert_eq!(mem::size_of::<Option<usize>>(), 2 * mem::size_of::<usize>());

impl Default for Ptr {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl Ptr {
    #[inline(always)]
    pub fn new(index: usize) -> Option<Self> {
        if index == usize::MAX {
            None
        } else {
            Some(Ptr(index))
        }
    }

    #[inline(always)]
    pub fn null() -> Self {
        Ptr(usize::MAX)
    }

    // Methods on this type must be `#[inline]` to help the compiler see that the `Option` values
    // are only intermediate values used to make writing code easier. Instead of checking for `None`
    // and then `usize::MAX`, we want the compiler to just check the latter.
    #[inline(always)]
    pub fn into_index(self) -> Option<usize> {
        let Ptr(index) = self;
        if index == usize::MAX {
            None
        } else {
            Some(index)
        }
    }

    /// Returns `None` for the null pointer, `Some(self)` otherwise
    #[inline(always)]
    pub fn non_null(self) -> Option<Self> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }

    #[inline(always)]
    pub fn is_null(self) -> bool {
        self.0 == usize::MAX
    }
}

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(T),
    /// An item in the free list
    Vacant {
        /// The next entry in the free list or `Ptr::null()` if this is the last entry in the free
        /// list
        next: Ptr,
    },
}

/// An allocation primitive similar to `Vec`, but implemented to reuse space from removed entries.
///
/// Items are kept contiguously in memory, but indexes are not shifted when an individual item is
/// removed. Instead of always pushing items after the previously pushed item, this data structure
/// will reuse space from previously removed entries when possible. This makes removal cheaper than
/// a standard `Vec<T>`.
///
/// Indexing with a pointer to a removed entry panics, just like indexing a `Vec` out of bounds.
#[derive(Debug, Clone)]
pub struct Slab<T> {
    items: Vec<Entry<T>>,
    /// The first entry in the free list or `Ptr::null()` if the free list is empty
    ///
    /// The free list is a linked list stored in `items` that is used as a stack to track which
    /// entries have space that can be reused in calls to `push`.
    free_list_head: Ptr,
    /// The length of the free list
    free_len: usize,
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self {
            items: Vec::default(),
            free_list_head: Ptr::null(),
            free_len: 0,
        }
    }
}

impl<T> Slab<T> {
    /// Creates an empty slab
    ///
    /// The slab is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty slab with the specified capacity.
    ///
    /// The slab will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the slab will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of entries in the slab that contain values
    ///
    /// This is the number of items pushed minus the number of items removed
    pub fn len(&self) -> usize {
        self.items.len() - self.free_len
    }

    /// Returns true if the slab is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the slab can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns a reference to a value in the slab, or `None` if the pointer is null, out of
    /// bounds or refers to a removed entry
    pub fn get(&self, ptr: Ptr) -> Option<&T> {
        match self.items.get(ptr.into_index()?) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to a value in the slab, or `None` if the pointer is null, out
    /// of bounds or refers to a removed entry
    pub fn get_mut(&mut self, ptr: Ptr) -> Option<&mut T> {
        match self.items.get_mut(ptr.into_index()?) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Pushes a value into the slab and returns a pointer to the entry it was placed in.
    ///
    /// The item may be inserted at the end of the list, or in the space from an item was previously
    /// removed.
    pub fn push(&mut self, value: T) -> Ptr {
        // Check if we can reuse some space from the free list
        if let Some(index) = self.free_list_head.into_index() {
            let entry = &mut self.items[index];
            let next_free = match *entry {
                Entry::Vacant {next} => next,
                Entry::Occupied(_) => panic!("free list entry {} is occupied", index),
            };

            self.free_list_head = next_free;
            self.free_len -= 1;
            *entry = Entry::Occupied(value);

            // Indexes on the free list were produced by `push`, so they are never usize::MAX
            return Ptr(index);
        }

        let index = self.items.len();
        let ptr = match Ptr::new(index) {
            Some(ptr) => ptr,
            // Since we store `Ptr` internally, we can't have usize::MAX as a valid index
            None => panic!("cannot have more than usize::MAX - 1 entries in slab"),
        };

        self.items.push(Entry::Occupied(value));

        ptr
    }

    /// Removes an item from the slab, returning its value.
    ///
    /// The space for the item will be reused in future calls to `push`. This does not move or
    /// modify any other entries in the slab. Their pointers remain the same and can still be used.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` does not refer to an occupied entry.
    pub fn remove(&mut self, ptr: Ptr) -> T {
        let index = match ptr.into_index() {
            Some(index) if index < self.items.len() => index,
            _ => panic!("cannot remove {:?} from a slab of {} entries", ptr, self.items.len()),
        };

        let entry = &mut self.items[index];
        if let Entry::Vacant {..} = entry {
            panic!("cannot remove entry {} twice", index);
        }

        // Retrieve the value in this entry by swapping in a free entry
        let prev = mem::replace(entry, Entry::Vacant {next: self.free_list_head});
        self.free_list_head = ptr;
        self.free_len += 1;

        match prev {
            Entry::Occupied(value) => value,
            // Checked above
            Entry::Vacant {..} => unreachable!(),
        }
    }

    /// Clears the slab, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the slab.
    ///
    /// This invalidates all previous pointers returned from `push`.
    pub fn clear(&mut self) {
        self.items.clear();
        self.free_list_head = Ptr::null();
        self.free_len = 0;
    }
}

impl<T> Index<Ptr> for Slab<T> {
    type Output = T;

    fn index(&self, ptr: Ptr) -> &T {
        match self.get(ptr) {
            Some(value) => value,
            None => panic!("invalid slab pointer {:?}", ptr),
        }
    }
}

impl<T> IndexMut<Ptr> for Slab<T> {
    fn index_mut(&mut self, ptr: Ptr) -> &mut T {
        match self.get_mut(ptr) {
            Some(value) => value,
            None => panic!("invalid slab pointer {:?}", ptr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::rc::Rc;

    #[test]
    fn push_get_remove() {
        let mut slab = Slab::new();
        assert!(slab.is_empty());

        let a = slab.push("a");
        let b = slab.push("b");
        let c = slab.push("c");
        assert_eq!(slab.len(), 3);
        assert_eq!(slab[a], "a");
        assert_eq!(slab[b], "b");
        assert_eq!(slab[c], "c");

        assert_eq!(slab.remove(b), "b");
        assert_eq!(slab.len(), 2);
        assert_eq!(slab.get(b), None);
        // Other entries are not moved
        assert_eq!(slab[a], "a");
        assert_eq!(slab[c], "c");
    }

    #[test]
    fn reuses_removed_entries() {
        let mut slab = Slab::new();
        let ptrs: Vec<_> = (0..8).map(|i| slab.push(i)).collect();

        slab.remove(ptrs[2]);
        slab.remove(ptrs[5]);

        // The free list is used as a stack
        assert_eq!(slab.push(50), ptrs[5]);
        assert_eq!(slab.push(20), ptrs[2]);
        // Free list exhausted, so new entries go at the end
        let last = slab.push(80);
        assert_eq!(last.into_index(), Some(8));

        assert_eq!(slab.len(), 9);
        assert_eq!(slab[ptrs[5]], 50);
        assert_eq!(slab[ptrs[2]], 20);
    }

    #[test]
    fn null_pointers() {
        let mut slab = Slab::new();
        slab.push(1);

        assert!(Ptr::null().is_null());
        assert_eq!(Ptr::default(), Ptr::null());
        assert_eq!(Ptr::null().non_null(), None);
        assert_eq!(Ptr::new(usize::MAX), None);
        assert_eq!(slab.get(Ptr::null()), None);
        assert_eq!(slab.get_mut(Ptr::null()), None);
    }

    #[test]
    #[should_panic(expected = "twice")]
    fn double_remove_panics() {
        let mut slab = Slab::new();
        let a = slab.push(1);
        slab.push(2);
        slab.remove(a);
        slab.remove(a);
    }

    #[test]
    fn clear_drops_values() {
        let value = Rc::new(());
        let mut slab = Slab::new();
        let ptrs: Vec<_> = (0..16).map(|_| slab.push(value.clone())).collect();
        for &ptr in ptrs.iter().step_by(3) {
            slab.remove(ptr);
        }
        assert_eq!(Rc::strong_count(&value), 1 + slab.len());

        slab.clear();
        assert!(slab.is_empty());
        assert_eq!(Rc::strong_count(&value), 1);

        // Pointers start from the beginning again
        assert_eq!(slab.push(value.clone()).into_index(), Some(0));
    }

    #[test]
    fn clone_keeps_pointers() {
        let mut slab = Slab::new();
        let ptrs: Vec<_> = (0..10).map(|i| slab.push(i * 2)).collect();
        slab.remove(ptrs[4]);

        let mut copy = slab.clone();
        for (i, &ptr) in ptrs.iter().enumerate() {
            assert_eq!(copy.get(ptr), slab.get(ptr), "entry {}", i);
        }

        // The copy has its own free list
        assert_eq!(copy.push(99), ptrs[4]);
        assert_eq!(slab.get(ptrs[4]), None);
    }
}
