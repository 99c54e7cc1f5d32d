/// Use cases module containing application logic orchestration
mod inventory_controller;

pub use inventory_controller::InventoryController;
