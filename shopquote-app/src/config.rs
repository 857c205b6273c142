use anyhow::{Context, Result};
use shopquote_schemas::{
    catalog::CatalogService,
    employee::Employee,
    file_formats::{CatalogFile, EmployeeFile, ShopConfigFile},
    overhead::OverheadConfiguration,
};
use std::{collections::HashMap, fs, path::Path};

/// Everything the shop keeps on disk that a quote depends on.
pub struct ShopData {
    pub shop_name: String,
    pub employees: HashMap<String, Employee>,
    pub services: HashMap<String, CatalogService>,
    pub overhead: OverheadConfiguration,
}

impl ShopData {
    /// Loads employees, the service catalog and `shop.yaml` from `base_path`.
    pub fn load(base_path: &str) -> Result<Self> {
        println!("Loading shop data from '{}'...", base_path);

        let employees = load_yaml_files_into_map(
            Path::new(base_path).join("employees"),
            |file: EmployeeFile| file.employees,
            |item: &Employee| item.employee_id.clone(),
        )?;
        let services = load_yaml_files_into_map(
            Path::new(base_path).join("services"),
            |file: CatalogFile| file.services,
            |item: &CatalogService| item.service_id.clone(),
        )?;

        let shop_path = Path::new(base_path).join("shop.yaml");
        let content = fs::read_to_string(&shop_path)
            .with_context(|| format!("Failed to read {:?}", shop_path))?;
        let shop: ShopConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", shop_path))?;

        println!(
            "Shop data loaded: {} employees, {} catalog services.",
            employees.len(),
            services.len()
        );
        Ok(Self {
            shop_name: shop.shop_name,
            employees,
            services,
            overhead: shop.overhead,
        })
    }

    /// Catalog entries sorted by id, for stable list output.
    pub fn sorted_services(&self) -> Vec<CatalogService> {
        let mut services: Vec<_> = self.services.values().cloned().collect();
        services.sort_by(|a, b| a.service_id.cmp(&b.service_id));
        services
    }

    pub fn sorted_employees(&self) -> Vec<Employee> {
        let mut employees: Vec<_> = self.employees.values().cloned().collect();
        employees.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        employees
    }
}

/// Generic helper to load all YAML files in a directory into a HashMap.
fn load_yaml_files_into_map<P, F, E, T, K>(
    dir_path: P,
    extract_vec: E,
    get_key: K,
) -> Result<HashMap<String, T>>
where
    P: AsRef<Path>,
    F: for<'de> serde::Deserialize<'de>, // The file wrapper struct (e.g., CatalogFile)
    E: Fn(F) -> Vec<T>,                  // Pulls the Vec<T> out of the wrapper
    K: Fn(&T) -> String,                 // Map key for an item
{
    let mut map = HashMap::new();
    for entry in fs::read_dir(dir_path.as_ref())
        .with_context(|| format!("Failed to read directory: {:?}", dir_path.as_ref()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            let content = fs::read_to_string(&path)?;
            let file_wrapper: F = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

            for item in extract_vec(file_wrapper) {
                map.insert(get_key(&item), item);
            }
        }
    }
    Ok(map)
}
