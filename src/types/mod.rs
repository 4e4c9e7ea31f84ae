mod device_info;
mod device_type;
mod platform;

pub use device_info::*;
pub use device_type::*;
pub use platform::*;
