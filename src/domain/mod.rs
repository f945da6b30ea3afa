pub mod category;
pub mod dates;
pub mod de;
pub mod forms;
pub mod post;
pub mod reservation;
pub mod user;

pub use category::{Category, CategoryInput};
pub use post::{Post, PostUpdate};
pub use reservation::{Reservation, ReservationUpdate};
pub use user::{User, UserUpdate};
