use backend::api::catalog::{get_category_in, get_product_in};
use backend::api::listing::{category_filter_defaults_in, list_category_products_in};
use backend::db_utils::data_source::DataSource;
use backend::db_utils::fixture_tables::FixtureTables;
use common::catalog::ColorId;
use common::filter_criteria::{CriterionValue, Facet, FilterCriteria};

fn fixture_source() -> DataSource {
    DataSource::Fixture(FixtureTables::bundled().unwrap())
}

fn slugs(products: &[common::catalog::ProductSummary]) -> Vec<&str> {
    products.iter().map(|p| p.slug.as_str()).collect()
}

#[tokio::test]
async fn defaults_cover_the_whole_category() {
    let defaults = category_filter_defaults_in(&fixture_source(), "floor-tiles").await.unwrap();
    assert_eq!(defaults.price_floor, 29.0);
    assert_eq!(defaults.price_ceiling, 119.0);
    let colors = defaults.colors.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(colors, vec!["Beige", "Black", "Grey", "White"]);
    assert_eq!(defaults.facet_values[&Facet::Finish], vec!["Matte", "Polished", "Textured"]);
    assert_eq!(defaults.facet_values[&Facet::Material], vec!["Natural Stone", "Porcelain"]);
}

#[tokio::test]
async fn unrestricted_listing_shows_every_active_product() {
    let source = fixture_source();
    let defaults = category_filter_defaults_in(&source, "floor-tiles").await.unwrap();
    let products = list_category_products_in(&source, "floor-tiles", &defaults.criteria()).await.unwrap();
    assert_eq!(
        slugs(&products),
        vec![
            "carrara-marble-polished",
            "gres-porcelain-anthracite",
            "gres-porcelain-ivory",
            "grey-slate-natural",
            "oak-wood-effect-plank",
        ]
    );
}

#[tokio::test]
async fn price_range_and_color_narrow_the_grid() {
    let source = fixture_source();
    let mut criteria = FilterCriteria::unrestricted(30.0, 70.0);
    let products = list_category_products_in(&source, "floor-tiles", &criteria).await.unwrap();
    assert_eq!(slugs(&products), vec!["gres-porcelain-anthracite", "gres-porcelain-ivory", "grey-slate-natural"]);

    criteria.insert(CriterionValue::Color(ColorId(4)));
    let products = list_category_products_in(&source, "floor-tiles", &criteria).await.unwrap();
    assert_eq!(slugs(&products), vec!["gres-porcelain-ivory"]);
}

#[tokio::test]
async fn facet_values_filter_by_membership() {
    let source = fixture_source();
    let mut criteria = FilterCriteria::unrestricted(0.0, 200.0);
    criteria.insert(CriterionValue::Facet(Facet::Material, "Natural Stone".to_string()));
    let products = list_category_products_in(&source, "floor-tiles", &criteria).await.unwrap();
    assert_eq!(slugs(&products), vec!["carrara-marble-polished", "grey-slate-natural"]);
}

#[tokio::test]
async fn invalid_criteria_are_rejected() {
    let criteria = FilterCriteria::unrestricted(800.0, 200.0);
    let err = list_category_products_in(&fixture_source(), "floor-tiles", &criteria).await.unwrap_err();
    assert!(err.to_string().contains("invalid filter criteria"));
}

#[tokio::test]
async fn unknown_or_inactive_records_are_not_found() {
    let source = fixture_source();
    assert!(get_category_in(&source, "green-clearance").await.is_err());
    assert!(get_product_in(&source, "concrete-look-greige").await.is_err());
    let err = list_category_products_in(&source, "nope", &FilterCriteria::unrestricted(0.0, 1.0)).await.unwrap_err();
    assert!(err.to_string().contains("category not found"));
}

#[tokio::test]
async fn product_detail_embeds_category_and_color() {
    let product = get_product_in(&fixture_source(), "sage-zellige").await.unwrap();
    assert_eq!(product.summary.name, "Sage Zellige");
    assert_eq!(product.summary.category.as_ref().map(|c| c.slug.as_str()), Some("wall-tiles"));
    assert_eq!(product.color.as_ref().map(|c| c.name.as_str()), Some("Green"));
    assert_eq!(product.finish.as_deref(), Some("Gloss"));
    assert_eq!(product.stock, Some(120));
}
