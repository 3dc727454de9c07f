use minijinja::{Environment, context};
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
struct TypeInfo {
    name: String,
    rust: String,
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

    let template_path = Path::new("templates/raster_any.jinja");
    let template_source = fs::read_to_string(template_path)
        .expect("Unable to read template file");

    let env = Environment::new();
    let tmpl = env.template_from_str(&template_source)
        .expect("Invalid raster_any template");
    let rendered = tmpl.render(context! { types => type_list.types })
        .expect("Failed to render raster_any template");

    fs::write("src/generated_raster_any.rs", rendered)
        .expect("Unable to write generated file");

    println!("cargo:rerun-if-changed=../supported_types.yaml");
    println!("cargo:rerun-if-changed=templates/raster_any.jinja");
}
