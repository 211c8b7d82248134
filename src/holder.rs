use crate::Compound;

/// An object that may carry a root tag tree, such as an item stack.
///
/// [`TagAccessor::of_holder`](crate::TagAccessor::of_holder) only calls
/// [`set_tag`](TagHolder::set_tag) when a write finds no tree attached yet.
pub trait TagHolder {
    fn tag(&self) -> Option<&Compound>;

    fn tag_mut(&mut self) -> Option<&mut Compound>;

    fn set_tag(&mut self, tag: Compound);
}

/// A bare slot is the simplest holder.
impl TagHolder for Option<Compound> {
    #[inline]
    fn tag(&self) -> Option<&Compound> {
        self.as_ref()
    }

    #[inline]
    fn tag_mut(&mut self) -> Option<&mut Compound> {
        self.as_mut()
    }

    #[inline]
    fn set_tag(&mut self, tag: Compound) {
        *self = Some(tag);
    }
}
