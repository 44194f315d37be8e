pub mod a001_medicine;
pub mod a002_warehouse;
pub mod a003_pharmacy;
pub mod a004_representative;
pub mod a005_missing_item;
pub mod a006_warehouse_medicine;
pub mod a007_warehouse_order;
