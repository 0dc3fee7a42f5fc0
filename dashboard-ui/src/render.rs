//! HTML page rendering.
//!
//! Handlers pass the request path in as the current location. The view
//! models below are the only place where core decisions meet concrete class
//! names from the theme.

use anyhow::{Context, Result};
use dashboard::core::active_route::{resolve, resolve_all};
use dashboard::core::classes::compose_classes;
use dashboard::core::status::present;
use dashboard::core::types::{LinkVariant, NavigationEntry, StyleVariant};
use dashboard::io::config::DashboardConfig;
use dashboard::nav::CUSTOMERS_PATH;
use minijinja::{Environment, context};
use serde::Serialize;
use tracing::debug;

use crate::demo;

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
const LANDING_TEMPLATE: &str = include_str!("../templates/landing.html");
const SHELL_TEMPLATE: &str = include_str!("../templates/shell.html");
const OVERVIEW_TEMPLATE: &str = include_str!("../templates/overview.html");
const INVOICES_TEMPLATE: &str = include_str!("../templates/invoices.html");
const CUSTOMERS_TEMPLATE: &str = include_str!("../templates/customers.html");
const ANIMATIONS_TEMPLATE: &str = include_str!("../templates/animations.html");
const INVOICE_DEMO_TEMPLATE: &str = include_str!("../templates/invoice_demo.html");

const LANDING_LINK_BASE: &str = "flex h-[48px] grow items-center justify-center gap-2 rounded-md \
     bg-gray-50 p-3 text-sm font-medium hover:bg-sky-100 hover:text-blue-600 md:flex-none \
     md:justify-start md:p-2 md:px-3";
const LANDING_LINK_ACTIVE: &str = "bg-sky-100 text-blue-600";

/// Pages rendered inside the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPage {
    Overview,
    Invoices,
    Customers,
    Animations,
}

impl DashboardPage {
    fn template(self) -> &'static str {
        match self {
            DashboardPage::Overview => "overview.html",
            DashboardPage::Invoices => "invoices.html",
            DashboardPage::Customers => "customers.html",
            DashboardPage::Animations => "animations.html",
        }
    }

    fn title(self) -> &'static str {
        match self {
            DashboardPage::Overview => "Dashboard",
            DashboardPage::Invoices => "Invoices",
            DashboardPage::Customers => "Customers",
            DashboardPage::Animations => "图片动画展示",
        }
    }
}

/// A side navigation link ready for the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkView {
    pub label: String,
    pub target_path: String,
    pub is_active: bool,
    pub variant: LinkVariant,
    pub class_name: String,
}

/// A status badge ready for the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub display_label: String,
    pub style_variant: StyleVariant,
    pub class_name: String,
}

#[derive(Debug, Clone, Serialize)]
struct InvoiceRow {
    id: &'static str,
    customer: &'static str,
    amount: &'static str,
    date: &'static str,
    badge: BadgeView,
}

#[derive(Debug, Clone, Serialize)]
struct BadgeDemo {
    heading: &'static str,
    status: &'static str,
    badge: BadgeView,
}

#[derive(Debug, Clone, Serialize)]
struct AnimationDemo {
    title: &'static str,
    src: &'static str,
    class_name: &'static str,
}

/// Build the side navigation for the current location.
pub fn nav_links(config: &DashboardConfig, current_location: &str) -> Vec<NavLinkView> {
    let links: Vec<NavLinkView> = resolve_all(current_location, &config.navigation)
        .into_iter()
        .map(|(entry, decision)| NavLinkView {
            label: entry.label.clone(),
            target_path: entry.target_path.clone(),
            is_active: decision.is_active,
            variant: decision.variant,
            class_name: compose_classes(
                &config.theme.link_base,
                &[(decision.is_active, config.theme.link_active.as_str())],
            ),
        })
        .collect();

    let active: Vec<&str> = links
        .iter()
        .filter(|link| link.is_active)
        .map(|link| link.label.as_str())
        .collect();
    debug!(location = current_location, active = ?active, "resolved navigation");
    links
}

/// Build the badge for one status value.
pub fn badge(config: &DashboardConfig, status_value: &str) -> BadgeView {
    let decision = present(status_value, &config.statuses);
    debug!(
        status = status_value,
        label = %decision.display_label,
        variant = decision.style_variant.as_str(),
        "presented status"
    );
    let class_name = compose_classes(
        &config.theme.badge_base,
        &[(true, config.theme.variant_classes(decision.style_variant))],
    );
    BadgeView {
        display_label: decision.display_label,
        style_variant: decision.style_variant,
        class_name,
    }
}

/// Template engine wrapper around minijinja.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("landing.html", LANDING_TEMPLATE),
            ("shell.html", SHELL_TEMPLATE),
            ("overview.html", OVERVIEW_TEMPLATE),
            ("invoices.html", INVOICES_TEMPLATE),
            ("customers.html", CUSTOMERS_TEMPLATE),
            ("animations.html", ANIMATIONS_TEMPLATE),
            ("invoice_demo.html", INVOICE_DEMO_TEMPLATE),
        ] {
            env.add_template(name, source)
                .with_context(|| format!("load template {name}"))?;
        }
        Ok(Self { env })
    }

    /// Landing page with a single link into the dashboard.
    pub fn render_landing(
        &self,
        config: &DashboardConfig,
        current_location: &str,
    ) -> Result<String> {
        let target = NavigationEntry::new("dashboard-Link", CUSTOMERS_PATH);
        let decision = resolve(current_location, &target);
        let link = NavLinkView {
            class_name: compose_classes(
                LANDING_LINK_BASE,
                &[(decision.is_active, LANDING_LINK_ACTIVE)],
            ),
            label: target.label,
            target_path: target.target_path,
            is_active: decision.is_active,
            variant: decision.variant,
        };
        let template = self.env.get_template("landing.html")?;
        let rendered = template.render(context! {
            title => config.brand.name.as_str(),
            link => link,
        })?;
        Ok(rendered)
    }

    /// A page wrapped in the dashboard shell with its side navigation.
    pub fn render_dashboard(
        &self,
        config: &DashboardConfig,
        current_location: &str,
        page: DashboardPage,
    ) -> Result<String> {
        let nav = nav_links(config, current_location);
        let template = self.env.get_template(page.template())?;
        let rendered = match page {
            DashboardPage::Invoices => {
                let invoices: Vec<InvoiceRow> = demo::INVOICES
                    .iter()
                    .map(|inv| InvoiceRow {
                        id: inv.id,
                        customer: inv.customer,
                        amount: inv.amount,
                        date: inv.date,
                        badge: badge(config, inv.status),
                    })
                    .collect();
                template.render(context! {
                    title => page.title(),
                    brand => &config.brand,
                    nav => nav,
                    invoices => invoices,
                })?
            }
            DashboardPage::Customers => template.render(context! {
                title => page.title(),
                brand => &config.brand,
                nav => nav,
                customers => demo::CUSTOMERS,
            })?,
            DashboardPage::Animations => {
                let animations: Vec<AnimationDemo> = demo::ANIMATIONS
                    .iter()
                    .map(|&(title, src, class_name)| AnimationDemo {
                        title,
                        src,
                        class_name,
                    })
                    .collect();
                template.render(context! {
                    title => page.title(),
                    brand => &config.brand,
                    nav => nav,
                    animations => animations,
                })?
            }
            DashboardPage::Overview => template.render(context! {
                title => page.title(),
                brand => &config.brand,
                nav => nav,
                invoice_count => demo::INVOICES.len(),
                customer_count => demo::CUSTOMERS.len(),
            })?,
        };
        Ok(rendered)
    }

    /// Standalone badge showcase.
    pub fn render_invoice_demo(&self, config: &DashboardConfig) -> Result<String> {
        let demos: Vec<BadgeDemo> = demo::BADGE_DEMO_STATUSES
            .iter()
            .map(|&(heading, status)| BadgeDemo {
                heading,
                status,
                badge: badge(config, status),
            })
            .collect();
        let template = self.env.get_template("invoice_demo.html")?;
        let rendered = template.render(context! {
            title => "InvoiceStatus 组件示例",
            demos => demos,
        })?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> PageRenderer {
        PageRenderer::new().expect("templates")
    }

    #[test]
    fn nav_links_mark_only_exact_match() {
        let config = DashboardConfig::default();
        let links = nav_links(&config, "/dashboard/invoices");
        let active: Vec<_> = links
            .iter()
            .filter(|l| l.is_active)
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(active, vec!["Invoices"]);
    }

    #[test]
    fn active_link_gets_theme_fragment_after_base() {
        let config = DashboardConfig::default();
        let links = nav_links(&config, "/dashboard");
        assert_eq!(
            links[0].class_name,
            format!("{} {}", config.theme.link_base, config.theme.link_active)
        );
        assert_eq!(links[1].class_name, config.theme.link_base);
        assert_eq!(links[1].variant, LinkVariant::Default);
    }

    #[test]
    fn badge_uses_variant_classes() {
        let config = DashboardConfig::default();
        let paid = badge(&config, "paid");
        assert_eq!(paid.display_label, "已付款");
        assert_eq!(
            paid.class_name,
            format!("{} bg-green-500 text-white", config.theme.badge_base)
        );
    }

    #[test]
    fn unknown_badge_echoes_value() {
        let config = DashboardConfig::default();
        let cancelled = badge(&config, "cancelled");
        assert_eq!(cancelled.display_label, "cancelled");
        assert_eq!(cancelled.style_variant, StyleVariant::Neutral);
    }

    #[test]
    fn dashboard_pages_render_nav_and_content() {
        let config = DashboardConfig::default();
        let html = renderer()
            .render_dashboard(&config, "/dashboard/invoices", DashboardPage::Invoices)
            .expect("render");
        assert!(html.contains("Acme Inc"));
        assert!(html.contains("INV-1001"));
        assert!(html.contains("待付款"));
        assert!(html.contains("已付款"));
        assert!(html.contains(">cancelled<"));
        assert!(html.contains(r#"aria-current="page""#));
    }

    #[test]
    fn every_dashboard_page_renders() {
        let config = DashboardConfig::default();
        let pages = renderer();
        for page in [
            DashboardPage::Overview,
            DashboardPage::Invoices,
            DashboardPage::Customers,
            DashboardPage::Animations,
        ] {
            let html = pages
                .render_dashboard(&config, "/dashboard", page)
                .expect("render");
            assert!(html.contains("Sign Out"), "{:?}", page);
        }
    }

    #[test]
    fn landing_link_is_active_only_on_customers() {
        let config = DashboardConfig::default();
        let pages = renderer();
        let home = pages.render_landing(&config, "/").expect("render");
        let customers = pages
            .render_landing(&config, CUSTOMERS_PATH)
            .expect("render");
        assert!(!home.contains(LANDING_LINK_ACTIVE));
        assert!(customers.contains(LANDING_LINK_ACTIVE));
    }

    #[test]
    fn brand_is_escaped() {
        let mut config = DashboardConfig::default();
        config.brand.name = "<b>Acme</b>".to_string();
        let html = renderer()
            .render_dashboard(&config, "/dashboard", DashboardPage::Overview)
            .expect("render");
        assert!(html.contains("&lt;b&gt;Acme"));
        assert!(!html.contains("<b>Acme"));
    }

    #[test]
    fn invoice_demo_shows_three_badges() {
        let config = DashboardConfig::default();
        let html = renderer().render_invoice_demo(&config).expect("render");
        assert!(html.contains("待付款"));
        assert!(html.contains("已付款"));
        assert!(html.contains("cancelled"));
    }
}
