//! Sample rows for the demo pages.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SampleInvoice {
    pub id: &'static str,
    pub customer: &'static str,
    pub amount: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleCustomer {
    pub name: &'static str,
    pub email: &'static str,
    pub total_invoices: u32,
}

pub const INVOICES: &[SampleInvoice] = &[
    SampleInvoice {
        id: "INV-1001",
        customer: "Delba de Oliveira",
        amount: "$157.95",
        date: "2025-12-06",
        status: "pending",
    },
    SampleInvoice {
        id: "INV-1002",
        customer: "Lee Robinson",
        amount: "$200.00",
        date: "2025-11-14",
        status: "paid",
    },
    SampleInvoice {
        id: "INV-1003",
        customer: "Michael Novotny",
        amount: "$89.40",
        date: "2025-10-29",
        status: "cancelled",
    },
    SampleInvoice {
        id: "INV-1004",
        customer: "Amy Burns",
        amount: "$32.50",
        date: "2025-10-03",
        status: "paid",
    },
];

pub const CUSTOMERS: &[SampleCustomer] = &[
    SampleCustomer {
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        total_invoices: 3,
    },
    SampleCustomer {
        name: "Lee Robinson",
        email: "lee@robinson.com",
        total_invoices: 5,
    },
    SampleCustomer {
        name: "Michael Novotny",
        email: "michael@novotny.com",
        total_invoices: 1,
    },
    SampleCustomer {
        name: "Amy Burns",
        email: "amy@burns.com",
        total_invoices: 2,
    },
];

/// Statuses shown on the badge demo page, one per line.
pub const BADGE_DEMO_STATUSES: &[(&str, &str)] = &[
    ("待付款状态", "pending"),
    ("已付款状态", "paid"),
    ("未知状态", "cancelled"),
];

/// Images and animation classes for the animation showcase.
///
/// Every image path is served from the workspace `public/` directory.
pub const ANIMATIONS: &[(&str, &str, &str)] = &[
    ("旋转动画", "/file.svg", "animate-spin"),
    ("脉冲动画", "/file.svg", "animate-pulse"),
    ("弹跳动画", "/file.svg", "animate-bounce"),
    (
        "悬停触发动画",
        "/file.svg",
        "hover:animate-spin transition-transform duration-300 cursor-pointer",
    ),
    ("组合动画", "/file.svg", "animate-spin animate-pulse"),
];
