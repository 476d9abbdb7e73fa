mod models;
mod project_store;
