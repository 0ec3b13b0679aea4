// src/lib.rs

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub mod entities {
    pub mod prelude;
    pub mod item;
    pub mod item_price;
    pub mod unit;
}

pub mod services {
    pub mod category_search;
}

pub mod models {
    pub mod browse;
}

pub mod handlers {
    pub mod browse;
}
