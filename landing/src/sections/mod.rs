// Landing page sections

mod architecture;
mod footer;
mod hero;

pub use architecture::Architecture;
pub use footer::Footer;
pub use hero::Hero;
