pub mod clock;
pub mod constants;
pub mod constellation;
pub mod particles;
pub mod scene;
pub mod script;
pub mod show;
pub mod surface;
pub mod timeline;

pub use clock::*;
pub use scene::*;
pub use script::*;
pub use show::*;
pub use surface::*;
