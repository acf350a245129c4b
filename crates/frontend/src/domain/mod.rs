pub mod a001_client;
pub mod a002_engineer;
pub mod a003_cloud_offer;
pub mod a004_soc_offer;
pub mod a005_pricing;
