mod client;
mod flow;
mod submission;
mod value_object;

pub use client::*;
pub use flow::*;
pub use submission::*;
pub use value_object::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod store;
        pub mod table;

        pub use store::*;
    }
}
