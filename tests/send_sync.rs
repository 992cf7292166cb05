//! Based on: https://github.com/tokio-rs/tokio/blob/d74d17307dd53215061c4a8a1f20a0e30461e296/tokio/tests/async_send_sync.rs

#![warn(rust_2018_idioms)]

use std::{any::Any, cell::Cell};
use std::rc::Rc;

use ordered_tree::{OrderedTree, Compare, Grid, tree};

fn require_send<T: Send>(_t: &T) {}
fn require_sync<T: Sync>(_t: &T) {}

struct NotSend {
    _a: Box<dyn Any + Sync>,
}

/// A comparator that can't leave its thread
struct LocalCompare {
    _marker: Rc<()>,
}

impl Compare<i32> for LocalCompare {
    fn greater(&self, a: &i32, b: &i32) -> bool {
        a > b
    }
}

struct Invalid;

trait AmbiguousIfSend<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfSend<()> for T {}
impl<T: ?Sized + Send> AmbiguousIfSend<Invalid> for T {}

trait AmbiguousIfSync<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfSync<()> for T {}
impl<T: ?Sized + Sync> AmbiguousIfSync<Invalid> for T {}

macro_rules! assert_value {
    ($type:ty: Send & Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            require_send(&f);
            require_sync(&f);
        };
    };
    ($type:ty: !Send & Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            AmbiguousIfSend::some_item(&f);
            require_sync(&f);
        };
    };
    ($type:ty: Send & !Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            require_send(&f);
            AmbiguousIfSync::some_item(&f);
        };
    };
    ($type:ty: !Send & !Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            AmbiguousIfSend::some_item(&f);
            AmbiguousIfSync::some_item(&f);
        };
    };
}

assert_value!(OrderedTree<i32>: Send & Sync);
assert_value!(OrderedTree<Rc<i32>>: !Send & !Sync);
assert_value!(OrderedTree<Cell<i32>>: Send & !Sync);
assert_value!(OrderedTree<NotSend>: !Send & Sync);
assert_value!(OrderedTree<i32, LocalCompare>: !Send & !Sync);

assert_value!(tree::Node<'_, i32>: Send & Sync);
assert_value!(tree::Node<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::Node<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::Node<'_, NotSend>: Send & Sync);

assert_value!(tree::NodeMut<'_, i32>: Send & Sync);
assert_value!(tree::NodeMut<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::NodeMut<'_, Cell<i32>>: Send & !Sync);
assert_value!(tree::NodeMut<'_, NotSend>: !Send & Sync);

assert_value!(tree::IterPreorder<'_, i32>: Send & Sync);
assert_value!(tree::IterPreorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::IterPreorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::IterPreorder<'_, NotSend>: Send & Sync);

assert_value!(tree::IterInorder<'_, i32>: Send & Sync);
assert_value!(tree::IterInorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::IterInorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::IterInorder<'_, NotSend>: Send & Sync);

assert_value!(tree::IterPostorder<'_, i32>: Send & Sync);
assert_value!(tree::IterPostorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::IterPostorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::IterPostorder<'_, NotSend>: Send & Sync);

assert_value!(tree::Iter<'_, i32>: Send & Sync);
assert_value!(tree::Iter<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::Iter<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::Iter<'_, NotSend>: Send & Sync);

assert_value!(tree::Cursor<'_, i32>: Send & Sync);
assert_value!(tree::Cursor<'_, Rc<i32>>: !Send & !Sync);
assert_value!(tree::Cursor<'_, Cell<i32>>: !Send & !Sync);
assert_value!(tree::Cursor<'_, NotSend>: Send & Sync);

assert_value!(Grid: Send & Sync);
