// src/config/options.rs
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub run: RunOptions,
    pub export: ExportOptions,
}

/// The three aggregated views a run can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Location,
    State,
    Cluster,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Location, ViewKind::State, ViewKind::Cluster];

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Location => "By location",
            ViewKind::State    => "By state",
            ViewKind::Cluster  => "By cluster",
        }
    }

    /// File stem used when exporting this view.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ViewKind::Location => LOCATION_FILE,
            ViewKind::State    => STATE_FILE,
            ViewKind::Cluster  => CLUSTER_FILE,
        }
    }

    pub fn parse(s: &str) -> Option<ViewKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "location" | "loc" => Some(ViewKind::Location),
            "state"            => Some(ViewKind::State),
            "cluster"          => Some(ViewKind::Cluster),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewSelector {
    All,
    One(ViewKind),
}

impl ViewSelector {
    pub fn views(&self) -> Vec<ViewKind> {
        match self {
            ViewSelector::All     => ViewKind::ALL.to_vec(),
            ViewSelector::One(v)  => vec![*v],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub dataset: PathBuf,
    pub rules: PathBuf,
    pub cities_dir: PathBuf,
    /// Used for rows without an advertiser cell of their own.
    pub advertiser: String,
    pub views: ViewSelector,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            rules: PathBuf::from(DEFAULT_RULES_FILE),
            cities_dir: PathBuf::from(DEFAULT_CITIES_DIR),
            advertiser: s!(DEFAULT_ADVERTISER),
            views: ViewSelector::All,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<ExportFormat> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
    pub include_headers: bool,
    /// Drop this column (by position) from every exported table.
    pub drop_column: Option<usize>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
            drop_column: None,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { PathBuf::from(s) };
    }

    /// `<out_dir>/<stem>.<ext>` for one view.
    pub fn path_for(&self, view: ViewKind) -> PathBuf {
        self.out_dir.join(join!(view.file_stem(), ".", self.format.ext()))
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_follows_format() {
        let mut export = ExportOptions::default();
        export.set_out_dir("reports");
        assert_eq!(export.path_for(ViewKind::State), Path::new("reports").join("by_state.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.path_for(ViewKind::Cluster), Path::new("reports").join("by_cluster.tsv"));
    }

    #[test]
    fn blank_out_dir_falls_back_to_default() {
        let mut export = ExportOptions::default();
        export.set_out_dir("   ");
        assert_eq!(export.out_dir(), Path::new(DEFAULT_OUT_DIR));
    }

    #[test]
    fn view_parse_and_selector() {
        assert_eq!(ViewKind::parse(" Cluster "), Some(ViewKind::Cluster));
        assert_eq!(ViewKind::parse("county"), None);
        assert_eq!(ViewSelector::All.views().len(), 3);
        assert_eq!(ViewSelector::One(ViewKind::State).views(), vec![ViewKind::State]);
    }
}
