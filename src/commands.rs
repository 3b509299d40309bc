pub mod pins;
pub mod utilities;
