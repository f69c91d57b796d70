// Page sections

mod almacenamiento;
mod footer;
mod header;
mod hero;
mod multimedia;
mod nomofobia;
mod scroll_top;
mod shared;

pub use almacenamiento::AlmacenamientoContent;
pub use footer::Footer;
pub use header::Header;
pub use multimedia::MultimediaContent;
pub use nomofobia::NomofobiaContent;
pub use scroll_top::ScrollTopButton;
