use std::collections::HashSet;
use std::path::Path;

fn main() {
    let dataset_path = Path::new("data/personnes.json");
    validate_dataset_file(dataset_path);
    set_build_dependencies();
}

fn validate_dataset_file(dataset_path: &Path) {
    // Ensure the embedded dataset exists at build time
    assert!(
        dataset_path.exists(),
        "\n\nDATASET BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the dataset file before building.\n",
        dataset_path.display()
    );

    let dataset_contents = std::fs::read_to_string(dataset_path).unwrap_or_else(|e| {
        panic!(
            "\n\nDATASET BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            dataset_path.display()
        );
    });

    let dataset: serde_json::Value = serde_json::from_str(&dataset_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nDATASET BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            dataset_path.display()
        );
    });

    validate_dataset_structure(&dataset);
}

fn validate_dataset_structure(dataset: &serde_json::Value) {
    assert!(
        dataset.is_object(),
        "\n\nDATASET BUILD ERROR: Root must be a JSON object\n\
         Got: {dataset}\n"
    );

    let persons = dataset.get("persons").unwrap_or_else(|| {
        panic!(
            "\n\nDATASET BUILD ERROR: Missing 'persons' field\n\
             The dataset must have a top-level 'persons' array.\n"
        );
    });

    let records = persons.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nDATASET BUILD ERROR: 'persons' must be an array\n\
             Got: {persons}\n"
        );
    });

    validate_persons(records);

    println!("cargo:warning=Validated dataset: {} persons", records.len());
}

fn validate_persons(records: &[serde_json::Value]) {
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for (i, person) in records.iter().enumerate() {
        let person_id = person
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_person_fields(person, person_id, i);

        assert!(
            seen_ids.insert(person_id),
            "\n\nDATASET BUILD ERROR: Duplicate person id '{person_id}' (index {i})\n\
             Person ids must be unique across the dataset.\n"
        );
    }
}

fn validate_person_fields(person: &serde_json::Value, person_id: &str, index: usize) {
    assert!(
        person.get("id").and_then(|v| v.as_str()).is_some(),
        "\n\nDATASET BUILD ERROR: Person at index {index} missing 'id' field\n"
    );
    assert!(
        person.get("nom").and_then(|v| v.as_str()).is_some(),
        "\n\nDATASET BUILD ERROR: Person '{person_id}' (index {index}) missing 'nom' field\n"
    );

    let sexe = person.get("sexe").and_then(|v| v.as_str());
    assert!(
        sexe.is_some(),
        "\n\nDATASET BUILD ERROR: Person '{person_id}' (index {index}) missing 'sexe' field\n"
    );
    if let Some(s) = sexe {
        assert!(
            s == "m" || s == "f",
            "\n\nDATASET BUILD ERROR: Person '{person_id}' has invalid sexe '{s}'\n\
             Expected 'm' or 'f'.\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the dataset changes
    println!("cargo:rerun-if-changed=data/personnes.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
