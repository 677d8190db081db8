//! Paginated plain-text report.
//!
//! The first page carries the title, the unique intersection count and the
//! ratings. The applicable catalog entries follow, one per line, on as many
//! "Applicable Intersection Labels" pages as the line budget requires. Pages
//! are separated by a form feed.

use std::fmt::Write as _;

use super::{Error, Exporter};
use crate::{config::ExportConfig, snapshot::DiagramSnapshot};

/// Heading of every label page.
pub const LABELS_HEADING: &str = "Applicable Intersection Labels";

/// Separator between rendered pages.
pub const PAGE_BREAK: char = '\u{c}';

/// One page of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    heading: String,
    lines: Vec<String>,
}

impl ReportPage {
    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Report exporter.
#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    lines_per_page: usize,
}

impl Report {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            title: config.title().to_string(),
            lines_per_page: config.lines_per_page(),
        }
    }

    /// Lays the report out into pages.
    pub fn pages(&self, snapshot: &DiagramSnapshot) -> Vec<ReportPage> {
        let mut summary = vec![
            format!("Unique Intersections: {}", snapshot.region_count()),
            String::new(),
            "Ratings:".to_string(),
        ];
        summary.extend(snapshot.ratings().iter().map(|(id, rating)| {
            let value = rating.map_or_else(|| "unset".to_string(), |r| format!("{r}/5"));
            format!("  {}: {value}", snapshot.label_for(*id))
        }));

        let mut pages = vec![ReportPage {
            heading: self.title.clone(),
            lines: summary,
        }];

        let entries: Vec<String> = snapshot
            .applicable()
            .iter()
            .map(|entry| {
                let labels: Vec<String> = entry
                    .required_ids()
                    .iter()
                    .map(|id| snapshot.label_for(*id))
                    .collect();
                format!("• {} ({})", entry.name(), labels.join(", "))
            })
            .collect();

        pages.extend(entries.chunks(self.lines_per_page).map(|chunk| ReportPage {
            heading: LABELS_HEADING.to_string(),
            lines: chunk.to_vec(),
        }));
        pages
    }
}

impl Exporter for Report {
    fn export_snapshot(&self, snapshot: &DiagramSnapshot) -> Result<String, Error> {
        let mut out = String::new();
        for (index, page) in self.pages(snapshot).iter().enumerate() {
            if index > 0 {
                out.push(PAGE_BREAK);
            }
            writeln!(out, "{}", page.heading())
                .map_err(|err| Error::Render(err.to_string()))?;
            writeln!(out).map_err(|err| Error::Render(err.to_string()))?;
            for line in page.lines() {
                writeln!(out, "{line}").map_err(|err| Error::Render(err.to_string()))?;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use venn_core::{
        ellipse::Ellipse,
        geometry::{Point, Size},
        identifier::Id,
    };

    use super::*;
    use crate::{
        catalog::{CatalogEntry, IntersectionCatalog},
        config::AxesConfig,
        defaults::default_ellipses,
        interaction::{Event, InteractionController},
        mapping::CoordinateMapper,
        model::EllipseModel,
        regions::RegionCounter,
    };

    fn controller() -> InteractionController {
        let mapper = CoordinateMapper::new(&AxesConfig::default()).unwrap();
        InteractionController::new(EllipseModel::new(default_ellipses(), mapper).unwrap())
    }

    fn snapshot(controller: &InteractionController, catalog: &IntersectionCatalog) -> DiagramSnapshot {
        let counter = RegionCounter::new(Size::new(800.0, 600.0), 8.0);
        DiagramSnapshot::capture(controller, &counter, catalog)
    }

    fn report(lines_per_page: usize) -> Report {
        let config: ExportConfig =
            toml::from_str(&format!("lines_per_page = {lines_per_page}")).unwrap();
        Report::new(&config)
    }

    #[test]
    fn test_title_page() {
        let mut c = controller();
        c.handle(Event::SetRating {
            id: Id::new("intent"),
            value: 3,
        })
        .unwrap();
        let pages = report(20).pages(&snapshot(&c, &IntersectionCatalog::default()));

        let title = &pages[0];
        assert_eq!(title.heading(), "Venn Diagram");
        assert!(title.lines()[0].starts_with("Unique Intersections: "));
        assert!(title.lines().contains(&"  Clear Strategic Intent: 3/5".to_string()));
        assert!(title.lines().contains(&"  Change sustainability: unset".to_string()));
    }

    #[test]
    fn test_entry_lines_use_flattened_labels() {
        let pages = report(20).pages(&snapshot(&controller(), &IntersectionCatalog::default()));

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].heading(), LABELS_HEADING);
        assert_eq!(pages[1].lines().len(), 20);
        assert_eq!(
            pages[1].lines()[1],
            "• Cohesion (Clear Strategic Intent, Leadership alignment and buy-in)"
        );
    }

    #[test]
    fn test_pagination() {
        let pages = report(8).pages(&snapshot(&controller(), &IntersectionCatalog::default()));
        let sizes: Vec<usize> = pages[1..].iter().map(|p| p.lines().len()).collect();
        assert_eq!(sizes, [8, 8, 4]);

        let text = report(8)
            .export_snapshot(&snapshot(&controller(), &IntersectionCatalog::default()))
            .unwrap();
        assert_eq!(text.matches(PAGE_BREAK).count(), 3);
    }

    #[test]
    fn test_no_label_pages_when_nothing_applies() {
        let catalog =
            IntersectionCatalog::new(vec![CatalogEntry::new("Ghost", [Id::new("ghost")]).unwrap()]);
        let pages = report(20).pages(&snapshot(&controller(), &catalog));
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_unlabeled_region_uses_id() {
        let catalog =
            IntersectionCatalog::new(vec![CatalogEntry::new("Solo", [Id::new("solo")]).unwrap()]);
        let mapper = CoordinateMapper::new(&AxesConfig::default()).unwrap();
        let model = EllipseModel::new(
            vec![Ellipse::new("solo", Point::new(400.0, 300.0), 50.0, 50.0)],
            mapper,
        )
        .unwrap();
        let pages = report(20).pages(&snapshot(&InteractionController::new(model), &catalog));
        assert_eq!(pages[1].lines(), ["• Solo (solo)"]);
    }
}
