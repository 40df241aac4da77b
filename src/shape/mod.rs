pub(crate) mod model;
pub(crate) mod pipeline;
pub(crate) mod sampler;
pub(crate) mod tangent;
pub(crate) mod window;
