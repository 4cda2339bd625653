/// The four input layers, in the order they are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    TotalAdded,
    TotalModified,
    KaartAdded,
    KaartModified,
}

impl LayerRole {
    pub const ALL: [LayerRole; 4] = [
        LayerRole::TotalAdded,
        LayerRole::TotalModified,
        LayerRole::KaartAdded,
        LayerRole::KaartModified,
    ];

    /// Parameter name the layer is bound to.
    #[must_use]
    pub fn parameter(self) -> &'static str {
        match self {
            LayerRole::TotalAdded => "TOTAL_ADDED",
            LayerRole::TotalModified => "TOTAL_MODIFIED",
            LayerRole::KaartAdded => "KAART_ADDED",
            LayerRole::KaartModified => "KAART_MODIFIED",
        }
    }

    /// Name used in progress messages.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            LayerRole::TotalAdded => "total_added",
            LayerRole::TotalModified => "total_modified",
            LayerRole::KaartAdded => "kaart_added",
            LayerRole::KaartModified => "kaart_modified",
        }
    }
}

/// Rounded kilometre totals for each layer role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Distances {
    pub total_added: i64,
    pub total_modified: i64,
    pub kaart_added: i64,
    pub kaart_modified: i64,
}

impl Distances {
    pub fn set(&mut self, role: LayerRole, km: i64) {
        match role {
            LayerRole::TotalAdded => self.total_added = km,
            LayerRole::TotalModified => self.total_modified = km,
            LayerRole::KaartAdded => self.kaart_added = km,
            LayerRole::KaartModified => self.kaart_modified = km,
        }
    }

    /// The two data rows appended for `country`.
    #[must_use]
    pub fn summary_rows(&self, country: &str) -> [SummaryRow; 2] {
        [
            SummaryRow {
                country: country.to_string(),
                change: SummaryRow::ADDED.to_string(),
                kaart: self.kaart_added,
                total: self.total_added,
            },
            SummaryRow {
                country: country.to_string(),
                change: SummaryRow::MODIFIED.to_string(),
                kaart: self.kaart_modified,
                total: self.total_modified,
            },
        ]
    }
}

/// One data row of the summary CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub country: String,
    pub change: String,
    pub kaart: i64,
    pub total: i64,
}

impl SummaryRow {
    pub const HEADER: [&'static str; 4] = ["Country", "Data Change", "Kaart", "Total"];
    pub const ADDED: &'static str = "Km of road added";
    pub const MODIFIED: &'static str = "Km of road edited or modified";

    #[must_use]
    pub fn to_record(&self) -> [String; 4] {
        [
            self.country.clone(),
            self.change.clone(),
            self.kaart.to_string(),
            self.total.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_pair_kaart_with_total() {
        let distances = Distances {
            total_added: 40,
            total_modified: 7,
            kaart_added: 12,
            kaart_modified: 3,
        };

        let [added, modified] = distances.summary_rows("Kenya");

        assert_eq!(added.to_record(), ["Kenya", "Km of road added", "12", "40"]);
        assert_eq!(
            modified.to_record(),
            ["Kenya", "Km of road edited or modified", "3", "7"]
        );
    }

    #[test]
    fn set_follows_role() {
        let mut distances = Distances::default();
        for (km, role) in (1..).zip(LayerRole::ALL) {
            distances.set(role, km);
        }
        assert_eq!(distances.total_added, 1);
        assert_eq!(distances.kaart_modified, 4);
        assert_eq!(distances.kaart_added, 3);
    }
}
