// End-to-end pipeline tests over a small synthetic dataset

use std::fs;

use recipe_galaxy::core::{Ontology, Record};
use recipe_galaxy::pipeline::{GalaxyMap, PipelineParams};
use recipe_galaxy::processing::umap::EmbedParams;
use recipe_galaxy::processing::VectorParams;
use recipe_galaxy::search::search;
use recipe_galaxy::storage::load_records;

fn synthetic_records() -> Vec<Record> {
    vec![
        Record {
            id: "100".into(),
            name: "green rice bowl".into(),
            ingredients: vec!["diced onion".into(), "rice".into()],
            tags: vec!["vegan".into(), "easy".into()],
            steps: vec!["cook the rice".into()],
        },
        Record {
            id: "200".into(),
            name: "plain cake".into(),
            ingredients: vec!["flour".into(), "sugar".into()],
            tags: vec!["dessert".into(), "cake".into()],
            steps: vec!["bake".into()],
        },
        Record {
            id: "300".into(),
            name: "mystery chicken".into(),
            ingredients: vec!["chicken".into()],
            tags: vec![],
            steps: vec!["roast".into()],
        },
    ]
}

fn small_corpus_params(seed: u64) -> PipelineParams {
    PipelineParams {
        vector: VectorParams {
            max_df: 1.0,
            min_df: 1,
        },
        embed: EmbedParams {
            n_neighbors: 2,
            seed,
            ..EmbedParams::default()
        },
        ontology: Ontology::default(),
    }
}

#[test]
fn three_record_scenario_produces_positions_labels_and_ranking() {
    let map = GalaxyMap::build(synthetic_records(), &small_corpus_params(42)).unwrap();

    // Three 3D positions, aligned with input order
    assert_eq!(map.positions().len(), 3);
    for position in map.positions() {
        assert_eq!(position.len(), 3);
        assert!(position.iter().all(|c| c.is_finite()));
    }

    // Labels per the default ontology, including the empty-tag fallback
    let clusters: Vec<&str> = map
        .assignments()
        .iter()
        .map(|a| a.cluster.as_str())
        .collect();
    assert_eq!(
        clusters,
        vec!["Vegan Cluster", "Dessert Nebula", "Uncharted Space"]
    );

    // The onion/rice recipe wins its own query
    let matches = search(&map, "onion rice", 3);
    assert_eq!(matches[0].index, 0);
    assert!(matches[0].score > 0.0);
}

#[test]
fn export_order_matches_input_order() {
    let records = synthetic_records();
    let input_ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();

    let map = GalaxyMap::build(records, &small_corpus_params(42)).unwrap();
    let export_ids: Vec<String> = map.export_records().into_iter().map(|r| r.id).collect();

    assert_eq!(export_ids, input_ids);
}

#[test]
fn labels_and_vectors_are_deterministic_across_runs() {
    let first = GalaxyMap::build(synthetic_records(), &small_corpus_params(42)).unwrap();
    let second = GalaxyMap::build(synthetic_records(), &small_corpus_params(42)).unwrap();

    assert_eq!(first.assignments(), second.assignments());
    assert_eq!(first.vectors(), second.vectors());
    assert_eq!(first.positions(), second.positions());
    assert_eq!(
        first.vectorizer().vocabulary_size(),
        second.vectorizer().vocabulary_size()
    );
}

// A larger corpus exercises the edge scheduling and negative sampling of
// the layout optimizer far more than the three-record scenario does.
fn varied_records() -> Vec<Record> {
    let families: [(&str, &[&str], &str); 4] = [
        ("rice bowl", &["rice", "onion", "peas"], "vegan"),
        ("sponge cake", &["flour", "sugar", "butter"], "dessert"),
        ("roast chicken", &["chicken", "garlic", "thyme"], "poultry"),
        ("grilled fish", &["salmon", "lemon", "dill"], "seafood"),
    ];

    let mut records = Vec::new();
    for (f, (name, ingredients, tag)) in families.iter().enumerate() {
        for v in 0..3 {
            // Rotate through the family ingredients so variants overlap
            // without being identical
            let picked: Vec<String> = ingredients
                .iter()
                .cycle()
                .skip(v)
                .take(2)
                .map(|i| i.to_string())
                .collect();
            records.push(Record {
                id: format!("{}", f * 10 + v),
                name: format!("{name} {v}"),
                ingredients: picked,
                tags: vec![tag.to_string()],
                steps: vec!["cook".into()],
            });
        }
    }
    records
}

#[test]
fn same_seed_yields_identical_coordinates() {
    let params = small_corpus_params(42);
    let first = GalaxyMap::build(varied_records(), &params).unwrap();
    let second = GalaxyMap::build(varied_records(), &params).unwrap();

    assert_eq!(first.positions(), second.positions());

    let reseeded = GalaxyMap::build(varied_records(), &small_corpus_params(7)).unwrap();
    assert_ne!(first.positions(), reseeded.positions());
}

#[test]
fn oov_query_against_fitted_map_is_all_zero_not_an_error() {
    let map = GalaxyMap::build(synthetic_records(), &small_corpus_params(42)).unwrap();
    let vector = map.vectorizer().transform_one("quasar stardust");
    assert!(vector.is_zero());
}

#[test]
fn csv_dataset_flows_through_the_loader() {
    let dir = std::env::temp_dir().join("galaxy-pipeline-test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("recipes.csv");

    fs::write(
        &path,
        concat!(
            "name,id,minutes,tags,steps,ingredients\n",
            "green rice bowl,100,25,\"['vegan', 'easy']\",\"['cook the rice']\",\"['diced onion', 'rice']\"\n",
            "plain cake,200,60,\"['dessert', 'cake']\",\"['bake']\",\"['flour', 'sugar']\"\n",
            "mystery chicken,300,45,[],\"['roast']\",\"['chicken']\"\n",
        ),
    )
    .unwrap();

    let records = load_records(&path, 5000).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].ingredients, vec!["diced onion", "rice"]);
    assert!(records[2].tags.is_empty());

    // Row bound takes a prefix
    let bounded = load_records(&path, 2).unwrap();
    assert_eq!(bounded.len(), 2);
    assert_eq!(bounded[1].id, "200");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn malformed_rows_fail_the_whole_batch() {
    let dir = std::env::temp_dir().join("galaxy-malformed-test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.csv");

    fs::write(
        &path,
        concat!(
            "name,id,minutes,tags,steps,ingredients\n",
            "fine,1,5,\"['vegan']\",\"['mix']\",\"['rice']\"\n",
            "broken,2,5,not-a-list,\"['mix']\",\"['rice']\"\n",
        ),
    )
    .unwrap();

    let err = load_records(&path, 5000).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("row 2"));
    assert!(message.contains("tags"));

    fs::remove_dir_all(&dir).ok();
}
