pub mod product_page;

pub use product_page::{PageSource, ProductPageService};
