use minijinja::{Environment, context};
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
struct TypeInfo {
    name:    String,
    tag:     String,
    rust:    String,
    class:   String,
    min:     String,
    max:     String,
    #[serde(default)]
    default: bool,
}

#[derive(Debug, Deserialize, Serialize)]
struct TypeList {
    types: Vec<TypeInfo>,
}

fn main() {
    let yaml_path = Path::new("../supported_types.yaml");
    let yaml_str = fs::read_to_string(yaml_path)
        .expect("Unable to read supported_types.yaml");
    let type_list: TypeList = serde_yaml::from_str(&yaml_str)
        .expect("Failed to parse YAML");

    // Exactly one dtype is the construction default
    let defaults = type_list.types.iter().filter(|t| t.default).count();
    assert_eq!(defaults, 1, "supported_types.yaml must mark exactly one default type");

    let template_path = Path::new("templates/data_types.jinja");
    let template_source = fs::read_to_string(template_path)
        .expect("Unable to read template file");

    let env = Environment::new();
    let tmpl = env.template_from_str(&template_source)
        .expect("Invalid data_types template");
    let rendered = tmpl.render(context! { types => type_list.types })
        .expect("Failed to render data_types template");

    fs::write("src/generated_data_types.rs", rendered)
        .expect("Unable to write generated file");

    println!("cargo:rerun-if-changed=../supported_types.yaml");
    println!("cargo:rerun-if-changed=templates/data_types.jinja");
}
