pub mod calculate;
pub mod health;
pub mod info;
pub mod items;
pub mod pages;
pub mod products;

pub use calculate::calculate_handler;
pub use health::health_handler;
pub use info::api_info_handler;
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, item_stats_handler,
    list_items_handler,
};
pub use pages::{home_handler, info_page_handler};
pub use products::{list_products_handler, product_stats_handler};
