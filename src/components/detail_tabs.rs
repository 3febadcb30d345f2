//! Detail Tabs
//!
//! The four tab bodies of the detail panel. Listings are read-only and their
//! buttons are inert; only the comment box writes to local state.

use leptos::prelude::*;
use pane_core::fixtures::DetailFixture;
use pane_core::{DetailLocalState, DetailSubject};

use crate::components::record_card::badge_class;

/// Avatar initials, extra members folded into "+N"
fn team_initials(fixture: &DetailFixture) -> (Vec<&'static str>, Option<String>) {
    let initials = fixture.team.iter().map(|member| member.initials).collect();
    let hidden = fixture.hidden_team_count;
    let overflow = (hidden > 0).then(|| format!("+{hidden}"));
    (initials, overflow)
}

#[component]
pub fn OverviewTab(
    subject: DetailSubject,
    fixture: DetailFixture,
    local: RwSignal<DetailLocalState>,
) -> impl IntoView {
    let progress = move || local.with(|s| s.progress());
    let (initials, overflow) = team_initials(&fixture);
    let title = subject.title().to_string();
    let status = subject.status(&fixture);
    let description = subject.description(&fixture).to_string();
    let requirements_heading = format!(
        "Requirements ({}/{})",
        fixture.completed_requirements(),
        fixture.requirements.len()
    );

    view! {
        <div class="detail-tab overview-tab">
            <div class="detail-title">
                <h3>{title}</h3>
                <div class="detail-subtitle">
                    <span class=badge_class("default")>{status.label()}</span>
                    <span class="muted">{fixture.started}</span>
                </div>
            </div>

            <div class="detail-section">
                <div class="progress-label">
                    <span>"Progress"</span>
                    <span class="muted">{move || format!("{}%", progress())}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style=move || format!("width: {}%;", progress())></div>
                </div>
            </div>

            <div class="detail-section">
                <h4>"Timeline"</h4>
                <div class="timeline-box">
                    <span>{format!("Start: {}", fixture.start_date)}</span>
                    <hr />
                    <span>{format!("Due: {}", fixture.due_date)}</span>
                </div>
            </div>

            <div class="detail-section">
                <h4>"Assigned Team"</h4>
                <div class="avatar-stack">
                    {initials.into_iter().map(|i| view! { <div class="avatar">{i}</div> }).collect_view()}
                    {overflow.map(|more| view! { <div class="avatar avatar-more">{more}</div> })}
                </div>
            </div>

            <div class="detail-section">
                <h4>"Description"</h4>
                <p>{description}</p>
            </div>

            <div class="detail-section">
                <h4>{requirements_heading}</h4>
                <ul class="requirements">
                    {fixture.requirements.into_iter().map(|req| {
                        let class = if req.done { "requirement done" } else { "requirement pending" };
                        view! {
                            <li class=class>
                                <span class="requirement-mark">{if req.done { "✓" } else { "◷" }}</span>
                                {req.text}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>

            <div class="detail-actions">
                <button type="button" class="outline-btn">"Edit"</button>
                <button type="button" class="destructive-btn">"Delete"</button>
            </div>
        </div>
    }
}

#[component]
pub fn ActivityTab(fixture: DetailFixture, local: RwSignal<DetailLocalState>) -> impl IntoView {
    let submit = move |_| {
        let mut submitted = false;
        local.update(|s| submitted = s.submit_comment());
        if submitted {
            let progress = local.with_untracked(|s| s.progress());
            log::debug!("comment submitted, progress now {}%", progress);
        }
    };

    view! {
        <div class="detail-tab activity-tab">
            {fixture.activity.into_iter().map(|entry| view! {
                <div class="activity-entry">
                    <div class="avatar">{entry.initials}</div>
                    <div class="activity-body">
                        <div class="activity-meta">
                            <p class="activity-author">{entry.author}</p>
                            <span class="muted">{entry.when}</span>
                        </div>
                        <p>{entry.summary}</p>
                        {entry.quote.map(|quote| view! { <div class="activity-quote">{quote}</div> })}
                    </div>
                </div>
            }).collect_view()}

            <hr />

            <div class="comment-box">
                <h4>"Add Comment"</h4>
                <textarea
                    placeholder="Type your comment here..."
                    prop:value=move || local.with(|s| s.comment().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        local.update(|s| s.set_comment(text));
                    }
                ></textarea>
                <button
                    type="button"
                    class="primary-btn"
                    disabled=move || !local.with(|s| s.can_submit())
                    on:click=submit
                >
                    "Add Comment"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn FilesTab(fixture: DetailFixture) -> impl IntoView {
    view! {
        <div class="detail-tab files-tab">
            {fixture.files.into_iter().map(|file| view! {
                <div class="file-row">
                    <div class="file-info">
                        <div class="file-icon">"▤"</div>
                        <div>
                            <p class="file-name">{file.name}</p>
                            <p class="muted">{format!("{} • {}", file.size, file.added)}</p>
                        </div>
                    </div>
                    <button type="button" class="ghost-btn">"Download"</button>
                </div>
            }).collect_view()}

            <div class="upload-area">
                <h3>"Upload a file"</h3>
                <p class="muted">"Drag and drop files here or click to browse"</p>
                <button type="button" class="primary-btn">"Upload File"</button>
            </div>
        </div>
    }
}

#[component]
pub fn PeopleTab(fixture: DetailFixture) -> impl IntoView {
    view! {
        <div class="detail-tab people-tab">
            {fixture.team.into_iter().map(|member| view! {
                <div class="person-row">
                    <div class="person-info">
                        <div class="avatar">{member.initials}</div>
                        <div>
                            <p class="person-name">{member.name}</p>
                            <p class="muted">{member.role}</p>
                        </div>
                    </div>
                    <button type="button" class="outline-btn small">"Message"</button>
                </div>
            }).collect_view()}

            <hr />

            <div class="add-member">
                <h4>"Add Team Member"</h4>
                <form class="add-member-form" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                    <input type="email" placeholder="Email address" />
                    <button type="submit" class="primary-btn">"Add"</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_initials_with_overflow() {
        let fixture = DetailFixture::sample();
        let (initials, overflow) = team_initials(&fixture);
        assert_eq!(initials, vec!["JD", "JS", "MJ", "SW"]);
        assert_eq!(overflow.as_deref(), Some("+3"));
    }

    #[test]
    fn test_team_initials_without_overflow() {
        let mut fixture = DetailFixture::sample();
        fixture.hidden_team_count = 0;
        assert_eq!(team_initials(&fixture).1, None);
    }
}
