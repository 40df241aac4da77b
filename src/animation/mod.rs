pub(crate) mod bake;
pub(crate) mod channel;
pub(crate) mod ease;
pub(crate) mod normalize;
