use serde::{Deserialize, Serialize};

/// Column naming contract between the reference loaders and the scorer.
///
/// Year-specific metrics are stored as `"<year><suffix>"` columns, e.g.
/// `2023-2024 - Transplants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSchema {
    pub center_code: String,
    pub pediatric: String,
    pub iota: String,
    pub baseline_years: [String; 3],
    pub performance_year: String,
    pub projection_year: String,
    pub transplants_suffix: String,
    pub acceptance_suffix: String,
    pub graft_suffix: String,
    pub directory_code: String,
    pub directory_name: String,
}

impl Default for ReferenceSchema {
    fn default() -> Self {
        Self {
            center_code: "Center Code".to_string(),
            pediatric: "Pediatric Center".to_string(),
            iota: "IOTA".to_string(),
            baseline_years: [
                "2022-2023".to_string(),
                "2023-2024".to_string(),
                "2024-2025".to_string(),
            ],
            performance_year: "2024-2025".to_string(),
            projection_year: "2025-2026".to_string(),
            transplants_suffix: " - Transplants".to_string(),
            acceptance_suffix: " - Organ Offer Acceptance Rate".to_string(),
            graft_suffix: " - Graft Survival Rate".to_string(),
            directory_code: "CTR_CD".to_string(),
            directory_name: "Name".to_string(),
        }
    }
}

impl ReferenceSchema {
    pub fn transplants_key(&self, year: &str) -> String {
        format!("{year}{}", self.transplants_suffix)
    }

    pub fn baseline_keys(&self) -> [String; 3] {
        [
            self.transplants_key(&self.baseline_years[0]),
            self.transplants_key(&self.baseline_years[1]),
            self.transplants_key(&self.baseline_years[2]),
        ]
    }

    pub fn performance_transplants_key(&self) -> String {
        self.transplants_key(&self.performance_year)
    }

    pub fn acceptance_key(&self) -> String {
        format!("{}{}", self.performance_year, self.acceptance_suffix)
    }

    pub fn graft_key(&self) -> String {
        format!("{}{}", self.performance_year, self.graft_suffix)
    }

    pub fn performance_in_baseline(&self) -> bool {
        self.baseline_years.contains(&self.performance_year)
    }

    /// Labels of the volume series: the baseline years, the performance year
    /// when it is not one of them, then the projection year.
    pub fn volume_labels(&self) -> Vec<String> {
        let mut labels = self.baseline_years.to_vec();
        if !self.performance_in_baseline() {
            labels.push(self.performance_year.clone());
        }
        labels.push(self.projection_year.clone());
        labels
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/schema.rs"]
mod tests;
