use crate::cli::StorageArgs;
use crate::infra::{open_service, parse_date, today_or_local};
use chrono::NaiveDate;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use talenta::error::AppError;
use talenta::talent::report::{DashboardSummary, PlacementView, TalentPoolBrief};
use talenta::talent::succession::{evaluate, evaluate_with_outlook};
use talenta::talent::{
    parse_birth_date, write_template, Employee, ImportBundle, ImportOutcome, ImportPaths, JobId,
    RecordGuard, RetirementOutlook, TalentServiceError,
};

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Performance score (1-100)
    #[arg(long)]
    pub(crate) performance: u8,
    /// Potential score (1-100)
    #[arg(long)]
    pub(crate) potential: u8,
    /// NIP used to derive the birth date for the retirement check
    #[arg(long)]
    pub(crate) nip: Option<String>,
    /// Role-tier (eselon) label that sets the retirement age
    #[arg(long, default_value = "")]
    pub(crate) role_tier: String,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// "Data Pegawai" sheet as CSV
    #[arg(long)]
    pub(crate) employees: PathBuf,
    /// "Riwayat Pendidikan" sheet as CSV
    #[arg(long)]
    pub(crate) education: Option<PathBuf>,
    /// "Riwayat Karir" sheet as CSV
    #[arg(long)]
    pub(crate) career: Option<PathBuf>,
    /// "Riwayat Kinerja" sheet as CSV
    #[arg(long)]
    pub(crate) performance: Option<PathBuf>,
    /// "Riwayat Pengembangan" sheet as CSV
    #[arg(long)]
    pub(crate) development: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) storage: StorageArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Destination file (stdout when omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Write the empty import template instead of the recap
    #[arg(long)]
    pub(crate) template: bool,
    /// Date the recap statuses are evaluated on (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) storage: StorageArgs,
}

#[derive(Args, Debug)]
pub(crate) struct SummaryArgs {
    /// Evaluation date used when re-evaluating statuses (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Recompute every stored succession status before summarising
    #[arg(long)]
    pub(crate) reevaluate: bool,
    #[command(flatten)]
    pub(crate) storage: StorageArgs,
}

#[derive(Args, Debug)]
pub(crate) struct CandidatesArgs {
    /// Critical job id (e.g. cj-000001)
    #[arg(long)]
    pub(crate) job_id: String,
    /// Date the candidate statuses are evaluated on (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) storage: StorageArgs,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    RecordGuard::default()
        .check_scores(args.performance, args.potential)
        .map_err(TalentServiceError::from)?;

    let today = today_or_local(args.today);
    let birth_date = args.nip.as_deref().and_then(parse_birth_date);
    let outlook = RetirementOutlook::assess(birth_date, &args.role_tier, today);
    let status = evaluate_with_outlook(args.performance, args.potential, &outlook);
    let placement = PlacementView::for_scores(args.performance, args.potential);

    for line in placement_lines(&placement) {
        println!("{line}");
    }
    if let Some(retirement_date) = outlook.retirement_date {
        println!(
            "Retirement: age {} on {}{}",
            outlook.retirement_age,
            retirement_date,
            retirement_note(&outlook)
        );
    }
    println!("Succession status: {}", status.label());
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let service = open_service(&args.storage)?;
    let bundle = ImportBundle::from_paths(&ImportPaths {
        employees: args.employees,
        education: args.education,
        career: args.career,
        performance: args.performance,
        development: args.development,
    })
    .map_err(TalentServiceError::from)?;

    let outcome = service.import_roster(&bundle, today_or_local(args.today))?;
    for line in import_lines(&outcome) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    if args.template {
        write_template(writer).map_err(TalentServiceError::from)?;
        return Ok(());
    }

    let service = open_service(&args.storage)?;
    let rows = service.export_recap(writer, today_or_local(args.today))?;
    if let Some(path) = &args.output {
        eprintln!("Wrote {rows} employees to {}", path.display());
    }
    Ok(())
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let service = open_service(&args.storage)?;
    let today = today_or_local(args.today);
    if args.reevaluate {
        let changed = service.reevaluate_all(today)?;
        println!("Re-evaluated succession statuses ({changed} changed)\n");
    }

    let summary = service.dashboard(today)?;
    let brief = service.talent_pool_brief()?;
    for line in summary_lines(&summary).into_iter().chain(brief_lines(&brief)) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_candidates(args: CandidatesArgs) -> Result<(), AppError> {
    let service = open_service(&args.storage)?;
    let (job, candidates) = service.candidates_for_job(&JobId(args.job_id))?;

    println!(
        "Candidates for {} ({}, {} vacancies)",
        job.title, job.id.0, job.vacancies
    );
    if candidates.is_empty() {
        println!("- none in boxes 7-9 target this position");
    }
    for line in candidate_lines(&candidates, today_or_local(args.today)) {
        println!("{line}");
    }
    Ok(())
}

fn retirement_note(outlook: &RetirementOutlook) -> &'static str {
    if outlook.past {
        " (past retirement age)"
    } else if outlook.approaching {
        " (retiring within a year)"
    } else {
        ""
    }
}

fn placement_lines(placement: &PlacementView) -> Vec<String> {
    vec![
        format!("Box {}: {}", placement.box_number, placement.category),
        format!(
            "Performance: {} | Potential: {}",
            placement.performance_label, placement.potential_label
        ),
        format!("Recommendation: {}", placement.recommendation),
    ]
}

fn import_lines(outcome: &ImportOutcome) -> Vec<String> {
    let mut lines = vec![
        "Import complete".to_string(),
        format!("- {} new employees added", outcome.added),
        format!("- {} employees updated", outcome.updated),
    ];

    if !outcome.warnings.is_empty() {
        lines.push("Warnings:".to_string());
        lines.extend(
            outcome
                .warnings
                .iter()
                .take(5)
                .map(|warning| format!("  - {warning}")),
        );
        if outcome.warnings.len() > 5 {
            lines.push(format!(
                "  ...and {} more warnings",
                outcome.warnings.len() - 5
            ));
        }
    }
    lines
}

fn summary_lines(summary: &DashboardSummary) -> Vec<String> {
    let mut lines = vec![
        "Talent dashboard".to_string(),
        format!(
            "- {} employees | {} critical jobs | {} vacancies | {} ready now",
            summary.total_employees,
            summary.total_critical_jobs,
            summary.total_vacancies,
            summary.ready_now
        ),
        "9-box distribution:".to_string(),
    ];
    lines.extend(summary.box_counts.iter().map(|entry| {
        format!(
            "  - Box {} {}: {}",
            entry.box_number, entry.category, entry.count
        )
    }));
    lines.push("Succession status:".to_string());
    lines.extend(
        summary
            .status_counts
            .iter()
            .map(|entry| format!("  - {}: {}", entry.status_label, entry.count)),
    );
    if !summary.top_talents.is_empty() {
        lines.push("Top talents:".to_string());
        lines.extend(summary.top_talents.iter().map(|talent| {
            format!(
                "  - {} (box {}, performance {}) {}",
                talent.name, talent.box_number, talent.performance, talent.position
            )
        }));
    }
    lines
}

fn brief_lines(brief: &TalentPoolBrief) -> Vec<String> {
    let mut lines = vec![String::new(), "Talent pool brief".to_string()];
    let groups = [
        ("Top talent", &brief.top_talent),
        ("Core", &brief.core),
        ("At risk", &brief.at_risk),
    ];
    for (label, rosters) in groups {
        let total: usize = rosters.iter().map(|roster| roster.count).sum();
        lines.push(format!("{label}: {total}"));
        for roster in rosters.iter().filter(|roster| roster.count > 0) {
            let names: Vec<&str> = roster
                .members
                .iter()
                .map(|member| member.name.as_str())
                .collect();
            lines.push(format!(
                "  - Box {} {}: {}",
                roster.box_number,
                roster.category,
                names.join(", ")
            ));
        }
    }
    lines
}

fn candidate_lines(candidates: &[Employee], today: NaiveDate) -> Vec<String> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, employee)| {
            let placement = PlacementView::for_scores(employee.performance, employee.potential);
            format!(
                "{}. {} ({}) box {} | performance {} | potential {} | {}",
                index + 1,
                employee.name,
                employee.employee_number,
                placement.box_number,
                employee.performance,
                employee.potential,
                evaluate(employee, today).label()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use talenta::talent::report::{dashboard_summary, talent_pool_brief};
    use talenta::talent::CriticalJob;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new("198501152010011001", "Ahmad Subarjo", "Staf", 92, 95),
            Employee::new("199003202015022002", "Siti Aminah", "Staf", 40, 40),
        ]
    }

    #[test]
    fn placement_lines_include_labels() {
        let lines = placement_lines(&PlacementView::for_scores(92, 95));
        assert!(lines[0].starts_with("Box 9"));
        assert!(lines[1].contains("Di Atas Ekspektasi"));
        assert!(lines[1].contains("Tinggi"));
    }

    #[test]
    fn import_lines_truncate_warnings_after_five() {
        let outcome = ImportOutcome {
            employees: Vec::new(),
            added: 2,
            updated: 1,
            warnings: (1..=7).map(|row| format!("Baris {row}")).collect(),
        };

        let lines = import_lines(&outcome);
        assert!(lines.contains(&"- 2 new employees added".to_string()));
        assert_eq!(
            lines.iter().filter(|line| line.starts_with("  - Baris")).count(),
            5
        );
        assert_eq!(lines.last().map(String::as_str), Some("  ...and 2 more warnings"));
    }

    #[test]
    fn summary_lines_report_totals_and_top_talent() {
        let jobs = vec![CriticalJob {
            id: JobId("cj-000001".to_string()),
            title: "Kepala Bidang Perencanaan".to_string(),
            work_unit: String::new(),
            description: String::new(),
            required_role_tier: String::new(),
            vacancies: 2,
        }];
        let lines = summary_lines(&dashboard_summary(&roster(), &jobs, today()));

        assert!(lines[1].contains("2 employees | 1 critical jobs | 2 vacancies"));
        assert!(lines.iter().any(|line| line.contains("Ahmad Subarjo (box 9")));
    }

    #[test]
    fn brief_lines_group_members() {
        let lines = brief_lines(&talent_pool_brief(&roster()));
        assert!(lines.contains(&"Top talent: 1".to_string()));
        assert!(lines.contains(&"At risk: 1".to_string()));
        assert!(lines.iter().any(|line| line.ends_with("Siti Aminah")));
    }

    #[test]
    fn classify_rejects_scores_outside_one_to_hundred() {
        for (performance, potential) in [(0, 80), (80, 101)] {
            let result = run_classify(ClassifyArgs {
                performance,
                potential,
                nip: None,
                role_tier: String::new(),
                today: Some(today()),
            });
            assert!(matches!(
                result,
                Err(AppError::Talent(TalentServiceError::Violation(_)))
            ));
        }
    }

    #[test]
    fn candidate_lines_are_numbered() {
        let lines = candidate_lines(&roster()[..1], today());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("1. Ahmad Subarjo (198501152010011001) box 9"));
        assert!(lines[0].ends_with("Siap Sekarang"));
    }
}
