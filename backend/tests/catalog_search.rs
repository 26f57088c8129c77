use backend::api::search::search_catalog_in;
use backend::db_utils::data_source::DataSource;
use backend::db_utils::fixture_tables::FixtureTables;

fn fixture_source() -> DataSource {
    DataSource::Fixture(FixtureTables::bundled().unwrap())
}

fn product_slugs(results: &common::search_result::SearchResultSet) -> Vec<&str> {
    results.products.iter().map(|p| p.slug.as_str()).collect()
}

#[tokio::test]
async fn products_match_name_or_description_ordered_and_capped() {
    let results = search_catalog_in(&fixture_source(), "GRE").await.unwrap();
    assert_eq!(
        product_slugs(&results),
        vec![
            "carrara-marble-polished",
            "granite-setts-grey",
            "green-glass-mosaic",
            "gres-porcelain-anthracite",
            "gres-porcelain-ivory",
            "grey-fabric-effect",
            "grey-slate-natural",
            "hexagon-marble-mosaic",
        ]
    );
    // the only category containing "gre" is inactive
    assert!(results.categories.is_empty());
}

#[tokio::test]
async fn categories_match_by_name() {
    let results = search_catalog_in(&fixture_source(), "tiles").await.unwrap();
    let names = results.categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Floor Tiles", "Wall Tiles"]);
}

#[tokio::test]
async fn product_results_carry_their_category() {
    let results = search_catalog_in(&fixture_source(), "zellige").await.unwrap();
    assert_eq!(results.products.len(), 1);
    let category = results.products[0].category.as_ref().unwrap();
    assert_eq!(category.slug, "wall-tiles");
    assert_eq!(results.products[0].dimensions.as_deref(), Some("10x10 cm"));
}

#[tokio::test]
async fn short_terms_return_nothing() {
    let results = search_catalog_in(&fixture_source(), " g ").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn inactive_products_are_never_found() {
    let results = search_catalog_in(&fixture_source(), "concrete").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn like_wildcards_in_the_term_are_literal() {
    let source = fixture_source();
    for term in ["%_", "__", "%%", "**"] {
        let results = search_catalog_in(&source, term).await.unwrap();
        assert!(results.is_empty(), "{term:?} matched {} products", results.products.len());
    }
    let results = search_catalog_in(&source, "20 mm").await.unwrap();
    assert_eq!(results.products.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>(), vec!["porcelain-paver-graphite"]);
}
