use std::path::Path;

use shipdash_types::{FetchFailure, FetchStatus};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, ExportResultViewModel, FetchErrorViewModel, Guidance,
    GuidanceViewModel, InitOutcome, InitResultViewModel, StatusBadge,
};

pub fn present_fetch_error(
    source: &str,
    failure: &FetchFailure,
) -> CommandResultViewModel<FetchErrorViewModel> {
    let view = FetchErrorViewModel {
        status: FetchStatus::Error,
        source: source.to_string(),
        message: failure.message.clone(),
    };

    CommandResultViewModel::new(view)
        .with_badge(StatusBadge::error("Error loading shipments"))
        .with_suggestion(
            Guidance::new("Check that the endpoint is reachable, or point at another one")
                .with_command(cmd::INIT_FORCE),
        )
}

pub fn present_export(
    output_path: &Path,
    exported_count: usize,
    total_shipments: usize,
    search: Option<String>,
) -> CommandResultViewModel<ExportResultViewModel> {
    let view = ExportResultViewModel {
        output_path: output_path.display().to_string(),
        exported_count,
        total_shipments,
        search,
    };

    let badge = if exported_count == 0 {
        StatusBadge::warning("Exported 0 shipments (header only)")
    } else {
        StatusBadge::success(format!("Exported {} shipment(s)", exported_count))
    };

    CommandResultViewModel::new(view).with_badge(badge)
}

pub fn present_init(
    config_path: &Path,
    endpoint: &str,
    window_days: usize,
    page_size: usize,
    outcome: InitOutcome,
) -> CommandResultViewModel<InitResultViewModel> {
    let view = InitResultViewModel {
        config_path: config_path.display().to_string(),
        endpoint: endpoint.to_string(),
        window_days,
        page_size,
        outcome,
    };

    let result = CommandResultViewModel::new(view);
    match outcome {
        InitOutcome::AlreadyExists => result
            .with_badge(StatusBadge::info("Config already exists"))
            .with_suggestion(Guidance::new("Overwrite it").with_command(cmd::INIT_FORCE)),
        InitOutcome::Created | InitOutcome::Overwritten => {
            let label = if outcome == InitOutcome::Created {
                "Config created"
            } else {
                "Config overwritten"
            };
            result
                .with_badge(StatusBadge::success(label))
                .with_suggestion(
                    Guidance::new("Preview this week's arrivals").with_command(cmd::DASHBOARD),
                )
                .with_suggestion(Guidance::new("Export to CSV").with_command(cmd::EXPORT))
        }
    }
}

pub fn present_guidance(
    config_path: &Path,
    config_exists: bool,
) -> CommandResultViewModel<GuidanceViewModel> {
    let view = GuidanceViewModel {
        config_path: config_path.display().to_string(),
        config_exists,
    };

    let result = CommandResultViewModel::new(view);
    if config_exists {
        result
            .with_suggestion(Guidance::new("Upcoming arrivals").with_command(cmd::DASHBOARD))
            .with_suggestion(Guidance::new("Search every shipment").with_command(cmd::SHIPMENTS))
            .with_suggestion(Guidance::new("Export to CSV").with_command(cmd::EXPORT))
    } else {
        result
            .with_suggestion(Guidance::new("Save your shipments endpoint").with_command(cmd::INIT))
            .with_suggestion(
                Guidance::new("Or try a local JSON file right away")
                    .with_command(fmt::with_endpoint("./shipments.json")),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::StatusLevel;
    use std::path::PathBuf;

    #[test]
    fn test_fetch_error_carries_message() {
        let failure = FetchFailure::new("connection refused");
        let result = present_fetch_error("http://localhost:3000/shipments", &failure);

        assert_eq!(result.content.status, FetchStatus::Error);
        assert_eq!(result.content.message, "connection refused");
        assert_eq!(result.badge.unwrap().level, StatusLevel::Error);
    }

    #[test]
    fn test_export_badge() {
        let path = PathBuf::from("out.csv");
        assert_eq!(
            present_export(&path, 4, 10, None).badge.unwrap().level,
            StatusLevel::Success
        );
        assert_eq!(
            present_export(&path, 0, 10, Some("zzz".into())).badge.unwrap().level,
            StatusLevel::Warning
        );
    }

    #[test]
    fn test_init_existing_suggests_force() {
        let result = present_init(
            Path::new("/tmp/config.toml"),
            "shipments.json",
            7,
            25,
            InitOutcome::AlreadyExists,
        );
        assert_eq!(result.suggestions[0].command.as_deref(), Some(cmd::INIT_FORCE));
    }

    #[test]
    fn test_guidance_without_config_points_to_init() {
        let result = present_guidance(Path::new("/tmp/none.toml"), false);
        assert!(!result.content.config_exists);
        assert_eq!(result.suggestions[0].command.as_deref(), Some(cmd::INIT));
    }
}
