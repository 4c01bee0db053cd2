//! Dashboard page
//!
//! Builds the full page from the snapshot and one viewer's session state.
//! Each section is its own component.

use leptos::*;

use super::chart::{revenue_chart, LineChartSvg};
use super::format::{format_percent, format_revenue};
use super::render_html;
use crate::data::{DashboardData, RankingEntry, Revenue, RevenueMonth, ShopPerformance, UserProgress};
use crate::session::{BubbleChallengeState, ChatTranscript, Notice, NoticeKind, SessionState};

/// Navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Tickets,
    KiAgent,
    SkillTree,
    Prognose,
    Profil,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Tickets,
        Tab::KiAgent,
        Tab::SkillTree,
        Tab::Prognose,
        Tab::Profil,
    ];

    /// Query-string value, e.g. `skill-tree`
    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Tickets => "tickets",
            Tab::KiAgent => "ki-agent",
            Tab::SkillTree => "skill-tree",
            Tab::Prognose => "prognose",
            Tab::Profil => "profil",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Tickets => "Tickets",
            Tab::KiAgent => "KI-Agent",
            Tab::SkillTree => "Skill Tree",
            Tab::Prognose => "Prognose",
            Tab::Profil => "Profil",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard => "📊",
            Tab::Tickets => "🎫",
            Tab::KiAgent => "🤖",
            Tab::SkillTree => "🧩",
            Tab::Prognose => "📈",
            Tab::Profil => "👤",
        }
    }

    /// Parse a query-string value; unknown values fall back to the dashboard
    pub fn from_slug(slug: Option<&str>) -> Self {
        slug.and_then(|s| Tab::ALL.into_iter().find(|t| t.slug() == s))
            .unwrap_or(Tab::Dashboard)
    }

    /// Text of the placeholder shown on tabs without content
    pub fn placeholder(&self) -> String {
        format!("{}-Bereich wird geladen...", self.name())
    }
}

/// Render the complete page
pub fn render_page(
    data: &DashboardData,
    session: &SessionState,
    notice: Option<&Notice>,
    tab: Tab,
) -> String {
    let data = data.clone();
    let bubble = session.bubble;
    let chat = session.chat.clone();
    let notice = notice.cloned();

    let html = render_html(move || {
        view! { <Page data=data bubble=bubble chat=chat notice=notice tab=tab /> }
    });
    format!("<!DOCTYPE html>\n{}", html)
}

#[component]
fn Page(
    data: DashboardData,
    bubble: BubbleChallengeState,
    chat: ChatTranscript,
    notice: Option<Notice>,
    tab: Tab,
) -> impl IntoView {
    let user_name = data
        .current_user()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let total_points = data.user_progress.total_points;

    let content = match tab {
        Tab::Dashboard => view! {
            <ProgressCard progress=data.user_progress />
            <RevenueCard revenue=data.revenue history=data.revenue_history />
            <ShopPerformanceCard shops=data.shop_performance />
            <BubbleChallengeCard bubble=bubble />
            <AgentChatCard chat=chat />
            <RankingCard ranking=data.ranking total_points=total_points />
        }
        .into_view(),
        other => view! { <div class="notice notice-info">{other.placeholder()}</div> }.into_view(),
    };

    view! {
        <html lang="de">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"KI-Cockpit - Dashboard"</title>
                <link rel="stylesheet" href="/static/style.css" />
            </head>
            <body>
                <div class="app">
                    <Navigation user_name=user_name active=tab />
                    {notice.map(|notice| view! { <NoticeBanner notice=notice /> })}
                    {content}
                </div>
            </body>
        </html>
    }
}

#[component]
fn SectionHeader(title: &'static str) -> impl IntoView {
    view! { <h2 class="section-header">{title}</h2> }
}

/// Horizontal bar, ratio clamped to [0, 1]
#[component]
pub fn ProgressBar(ratio: f64) -> impl IntoView {
    let pct = (ratio.clamp(0.0, 1.0) * 100.0).round();

    view! {
        <div class="progress" role="progressbar" aria-valuenow=pct.to_string()>
            <div class="progress-fill" style=format!("width: {}%", pct)></div>
        </div>
    }
}

/// Button without an action
#[component]
fn InertButton(label: &'static str, #[prop(optional)] primary: bool) -> impl IntoView {
    let class = if primary { "btn btn-primary" } else { "btn" };
    view! { <button type="button" class=class>{label}</button> }
}

/// Title bar and tab strip
#[component]
pub fn Navigation(user_name: String, active: Tab) -> impl IntoView {
    let initial = user_name.chars().next().map(String::from).unwrap_or_default();

    let tabs = Tab::ALL
        .iter()
        .map(|tab| {
            let mut class = format!("tab {}-tab", tab.slug());
            if *tab == active {
                class.push_str(" active");
            }
            view! {
                <a class=class href=format!("/?tab={}", tab.slug())>
                    {format!("{} {}", tab.icon(), tab.name())}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav>
            <div class="topbar">
                <h1 class="main-header">"KI-Cockpit"</h1>
                <div class="user-chip">
                    <div class="avatar">{initial}</div>
                    <span>{user_name}</span>
                </div>
            </div>
            <div class="tabs">{tabs}</div>
        </nav>
    }
}

/// One-shot banner
#[component]
pub fn NoticeBanner(notice: Notice) -> impl IntoView {
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Info => "notice notice-info",
        NoticeKind::Error => "notice notice-error",
    };
    view! { <div class=class role="status">{notice.message}</div> }
}

/// 🏆 Mein Fortschritt
#[component]
pub fn ProgressCard(progress: UserProgress) -> impl IntoView {
    let title = format!("Level {}: {}", progress.level, progress.level_title);
    let points = format!(
        "{} von {} Punkten",
        progress.current_points, progress.total_points
    );
    let ratio = progress.ratio();

    let skills = progress
        .skills
        .iter()
        .map(|skill| view! { <div class="skill-badge">{format!("{} {}", skill.icon, skill.name)}</div> })
        .collect_view();

    view! {
        <div class="card" id="progress">
            <SectionHeader title="🏆 Mein Fortschritt" />
            <div class="row">
                <div class="level-circle">{progress.level.to_string()}</div>
                <div class="grow">
                    <h3>{title}</h3>
                    <div>{points}</div>
                    <ProgressBar ratio=ratio />
                    <div class="progress-caption">
                        <span>{format!("{} Punkte", progress.current_points)}</span>
                        <span>{format!("{} Punkte", progress.total_points)}</span>
                    </div>
                </div>
            </div>
            {skills}
            <div class="btn-row">
                <InertButton label="Punkte einlösen" />
                <InertButton label="Gratis Punkte sichern" primary=true />
            </div>
        </div>
    }
}

#[component]
fn RevenueStat(value: u64, label: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class="stat-value">{format_revenue(value)}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// 💶 Umsatz-Übersicht
#[component]
pub fn RevenueCard(revenue: Revenue, history: Vec<RevenueMonth>) -> impl IntoView {
    view! {
        <div class="card" id="revenue">
            <SectionHeader title="💶 Umsatz-Übersicht" />
            <div class="btn-row">
                <InertButton label="Alle Shops" primary=true />
                <InertButton label="Einzelner Shop" />
                <InertButton label="Mitarbeiter-Umsatz" />
            </div>
            <div class="stats">
                <RevenueStat value=revenue.total label="Gesamtumsatz" />
                <RevenueStat value=revenue.personal label="Mein Umsatz" />
                <RevenueStat value=revenue.dsl label="DSL" />
                <RevenueStat value=revenue.warranty label="Wertgarantie" />
            </div>
            <LineChartSvg chart=revenue_chart(&history) width=800 height=300 />
        </div>
    }
}

/// 🏪 Shop Performance, one bar per shop in snapshot order
#[component]
pub fn ShopPerformanceCard(shops: Vec<ShopPerformance>) -> impl IntoView {
    let rows = shops
        .into_iter()
        .map(|shop| {
            let bar_style = format!(
                "background-color: {}; width: {}%",
                shop.color, shop.performance
            );
            view! {
                <div class="shop-row" data-shop=shop.name.clone()>
                    <div>{shop.name.clone()}</div>
                    <div class="performance-track">
                        <div class="performance-bar" style=bar_style></div>
                    </div>
                    <div>{format_percent(shop.performance)}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card" id="shops">
            <SectionHeader title="🏪 Shop Performance" />
            {rows}
        </div>
    }
}

/// Glücks-Bubble Challenge
#[component]
pub fn BubbleChallengeCard(bubble: BubbleChallengeState) -> impl IntoView {
    view! {
        <div class="bubble-challenge" id="bubble">
            <div class="row">
                <div class="bubble-icon">"🎁"</div>
                <div class="grow">
                    <h3>"Glücks-Bubble Challenge"</h3>
                    <div class="bubble-prompt">{bubble.prompt()}</div>
                </div>
            </div>
            <form method="post" action="/bubble/click">
                <button type="submit" class="btn">"Klicken"</button>
            </form>
        </div>
    }
}

/// 🤖 KI-Agent Verkaufschancen
#[component]
pub fn AgentChatCard(chat: ChatTranscript) -> impl IntoView {
    let messages = chat
        .messages()
        .iter()
        .map(|message| {
            view! {
                <div
                    class=format!("chat-message {}", message.role.css_class())
                    data-role=message.role.to_string()
                >
                    {message.content.clone()}
                    <div class="message-time">{message.timestamp.clone()}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card" id="chat" data-chat-id=chat.id().to_string()>
            <SectionHeader title="🤖 KI-Agent Verkaufschancen" />
            <div class="chat-log">{messages}</div>
            <form class="chat-form" method="post" action="/chat">
                <input
                    type="text"
                    name="message"
                    aria-label="Nachricht"
                    placeholder="Schreibe dem KI-Agenten..."
                    autocomplete="off"
                />
                <button type="submit" class="btn btn-primary">"Senden"</button>
            </form>
        </div>
    }
}

/// 👥 Mitarbeiter Ranking
#[component]
pub fn RankingCard(ranking: Vec<RankingEntry>, total_points: u32) -> impl IntoView {
    let rows = ranking
        .into_iter()
        .map(|entry| view! { <RankingRow entry=entry total_points=total_points /> })
        .collect_view();

    view! {
        <div class="card" id="ranking">
            <SectionHeader title="👥 Mitarbeiter Ranking" />
            {rows}
        </div>
    }
}

#[component]
fn RankingRow(entry: RankingEntry, total_points: u32) -> impl IntoView {
    let ratio = if total_points == 0 {
        0.0
    } else {
        entry.points as f64 / total_points as f64
    };
    let name_class = if entry.is_current_user {
        "current-user"
    } else {
        "employee"
    };

    view! {
        <div class="ranking-row">
            <div class=format!("rank-circle rank-{}", entry.rank)>{entry.rank.to_string()}</div>
            <div>
                <div class=name_class>{entry.name}</div>
                <div>{format!("{} Punkte", entry.points)}</div>
            </div>
            <ProgressBar ratio=ratio />
        </div>
    }
}
