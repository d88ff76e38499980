pub mod directory_listing;
