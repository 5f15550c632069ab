pub mod a001_company;
pub mod a002_park;
pub mod a003_lot;
pub mod a004_special_status;
pub mod a005_tenant;
pub mod a006_showing;
pub mod a007_photo;
pub mod common;
