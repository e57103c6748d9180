use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            Severity::Low => "badge low",
            Severity::Medium => "badge medium",
            Severity::High => "badge high",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccidentReport {
    pub id: u32,
    pub location: &'static str,
    pub date: &'static str,
    pub kind: &'static str,
    pub severity: Severity,
    pub cause: &'static str,
}

// Sample data until real reports are wired in.
pub static REPORTS: [AccidentReport; 5] = [
    AccidentReport { id: 1, location: "Mumbai", date: "2023-05-12", kind: "Vehicle Collision", severity: Severity::High, cause: "Distracted Driving" },
    AccidentReport { id: 2, location: "Delhi", date: "2023-06-18", kind: "Road Hazard", severity: Severity::Medium, cause: "Poor Road Condition" },
    AccidentReport { id: 3, location: "Bangalore", date: "2023-04-22", kind: "Animal Encounter", severity: Severity::Medium, cause: "Stray Animal" },
    AccidentReport { id: 4, location: "Chennai", date: "2023-07-08", kind: "Vehicle Collision", severity: Severity::High, cause: "Speeding" },
    AccidentReport { id: 5, location: "Kolkata", date: "2023-03-15", kind: "Road Hazard", severity: Severity::Low, cause: "Construction" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseFilter {
    All,
    Distracted,
    Road,
    Animal,
}

impl CauseFilter {
    pub const ALL: [CauseFilter; 4] = [
        CauseFilter::All,
        CauseFilter::Distracted,
        CauseFilter::Road,
        CauseFilter::Animal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CauseFilter::All => "All",
            CauseFilter::Distracted => "Distracted Driving",
            CauseFilter::Road => "Road Conditions",
            CauseFilter::Animal => "Animal Encounters",
        }
    }

    fn keyword(self) -> Option<&'static str> {
        match self {
            CauseFilter::All => None,
            CauseFilter::Distracted => Some("distracted"),
            CauseFilter::Road => Some("road"),
            CauseFilter::Animal => Some("animal"),
        }
    }

    pub fn matches(self, report: &AccidentReport) -> bool {
        match self.keyword() {
            None => true,
            Some(keyword) => report.cause.to_lowercase().contains(keyword),
        }
    }
}

pub fn filter_reports(reports: &[AccidentReport], filter: CauseFilter) -> Vec<&AccidentReport> {
    reports.iter().filter(|report| filter.matches(report)).collect()
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    number: &'static str,
    label: &'static str,
    color: &'static str,
    delay_ms: u32,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let (reveal_ref, visible) = use_reveal(0.1);
    html! {
        <div
            ref={reveal_ref}
            class={classes!("stat-card", "reveal", visible.then_some("visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            <div class="stat-number" style={format!("color: {};", props.color)}>{props.number}</div>
            <p>{props.label}</p>
        </div>
    }
}

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let (heading_ref, heading_visible) = use_reveal(0.1);
    let filter = use_state(|| CauseFilter::All);
    let visible_reports = filter_reports(&REPORTS, *filter);

    let stats_css = r#"
        .stats-section { padding: 5rem 0; background: #111827; color: white; }
        .stats-intro { text-align: center; color: #d1d5db; max-width: 48rem; margin: 0 auto 4rem; }
        .stat-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
            gap: 2rem;
            margin-bottom: 4rem;
        }
        .stat-card {
            background: white;
            color: #4b5563;
            border-radius: 8px;
            padding: 1.5rem;
            text-align: center;
        }
        .stat-number { font-size: 2.25rem; font-weight: bold; margin-bottom: 0.5rem; }
        .report-card { background: white; color: #1f2937; border-radius: 8px; padding: 1.5rem; overflow: hidden; }
        .report-filters { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
        .report-filters button {
            padding: 0.5rem 1rem;
            border: none;
            border-radius: 6px;
            background: #e5e7eb;
            color: #374151;
            cursor: pointer;
        }
        .report-filters button.selected { background: #F5DF4D; color: black; }
        .report-table { width: 100%; border-collapse: collapse; }
        .report-table th { background: #f3f4f6; text-align: left; padding: 0.5rem 1rem; }
        .report-table td { border-top: 1px solid #e5e7eb; padding: 0.75rem 1rem; }
        .badge { display: inline-block; padding: 0.25rem 0.5rem; border-radius: 999px; font-size: 0.75rem; font-weight: 600; }
        .badge.high { background: #fee2e2; color: #991b1b; }
        .badge.medium { background: #fef9c3; color: #854d0e; }
        .badge.low { background: #dcfce7; color: #166534; }
        .report-empty { text-align: center; padding: 2rem 0; color: #6b7280; }
    "#;

    html! {
        <section id="stats" class="stats-section">
            <style>{stats_css}</style>
            <div class="section-inner">
                <div ref={heading_ref} class={classes!("reveal", heading_visible.then_some("visible"))}>
                    <h2>{"Road Safety Statistics"}</h2>
                    <div class="section-rule"></div>
                    <p class="stats-intro">
                        {"Understanding the scale of road safety issues in India is crucial to appreciating the potential impact of the AI Helmet project"}
                    </p>
                </div>
                <div class="stat-grid">
                    <StatCard number="150,000+" label="Annual Road Fatalities" color="#FF304F" delay_ms={100} />
                    <StatCard number="68%" label="Due to Human Error" color="#F5DF4D" delay_ms={200} />
                    <StatCard number="27%" label="Caused by Poor Roads" color="#3A86FF" delay_ms={300} />
                    <StatCard number="45 min" label="Avg. Emergency Response" color="#8338EC" delay_ms={400} />
                </div>
                <div class="report-card">
                    <h3>{"Recent Accident Reports"}</h3>
                    <div class="report-filters">
                        { for CauseFilter::ALL.iter().map(|&option| {
                            let onclick = {
                                let filter = filter.clone();
                                Callback::from(move |_: MouseEvent| filter.set(option))
                            };
                            html! {
                                <button class={classes!((*filter == option).then_some("selected"))} onclick={onclick}>
                                    {option.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <div style="overflow-x: auto;">
                        <table class="report-table">
                            <thead>
                                <tr>
                                    <th>{"Location"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Severity"}</th>
                                    <th>{"Cause"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for visible_reports.iter().map(|report| html! {
                                    <tr key={report.id.to_string()}>
                                        <td>{report.location}</td>
                                        <td>{report.date}</td>
                                        <td>{report.kind}</td>
                                        <td><span class={report.severity.badge_class()}>{report.severity.label()}</span></td>
                                        <td>{report.cause}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                    if visible_reports.is_empty() {
                        <div class="report-empty">{"No accidents found matching the selected filter."}</div>
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(filter: CauseFilter) -> Vec<u32> {
        filter_reports(&REPORTS, filter).iter().map(|r| r.id).collect()
    }

    #[test]
    fn all_keeps_every_report() {
        assert_eq!(ids(CauseFilter::All), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filters_match_cause_case_insensitively() {
        assert_eq!(ids(CauseFilter::Distracted), vec![1]);
        assert_eq!(ids(CauseFilter::Road), vec![2]);
        assert_eq!(ids(CauseFilter::Animal), vec![3]);
    }

    #[test]
    fn filter_can_come_up_empty() {
        let reports = [AccidentReport { cause: "Speeding", ..REPORTS[0].clone() }];
        assert!(filter_reports(&reports, CauseFilter::Animal).is_empty());
    }
}
