mod boundary;
mod curve;
mod surface;

pub use boundary::Boundary;
pub use curve::Curve;
pub use surface::Surface;

#[cfg(test)]
pub(crate) use surface::tests::cuboid;
