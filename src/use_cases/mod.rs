pub mod attributes;
pub mod authenticate;
pub mod create_assets;
pub mod delete_asset;
pub mod list_assets;
pub mod update_assets;

#[cfg(test)]
pub(crate) mod test_support;
