//! Static site content
//!
//! Business details, statistics, services, sectors and navigation. All of it
//! is compiled in; nothing here changes at runtime.

use serde::Serialize;

use super::sections::SectionId;

/// Business identity and contact details
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Business {
    pub name: &'static str,
    /// Human-readable phone number
    pub phone: &'static str,
    /// Dialable phone number for `tel:` links
    pub phone_raw: &'static str,
    /// WhatsApp number without `+`
    pub whatsapp: &'static str,
    pub uen: &'static str,
    pub founded_year: i32,
    pub tagline: &'static str,
    pub canonical: &'static str,
}

impl Business {
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.phone_raw)
    }

    pub fn whatsapp_uri(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }

    /// schema.org `Electrician` description for the page head
    pub fn json_ld(&self, canonical: &str) -> serde_json::Value {
        serde_json::json!({
            "@context": "https://schema.org",
            "@type": "Electrician",
            "name": self.name,
            "telephone": self.phone_raw,
            "url": canonical,
            "foundingDate": self.founded_year.to_string(),
            "areaServed": "Singapore",
            "openingHours": "Mo-Su 00:00-23:59",
        })
    }
}

pub const BUSINESS: Business = Business {
    name: "SparkElec Pte Ltd",
    phone: "+65 9123 4567",
    phone_raw: "+6591234567",
    whatsapp: "6591234567",
    uen: "200912345A",
    founded_year: 2009,
    tagline: "Licensed Electricians",
    canonical: "https://sgelectrician.sg/",
};

/// Sections tracked by the scroll tracker, in visual order
pub const SECTIONS: [SectionId; 4] = ["home", "about", "services", "contact"];

/// A nav bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Home",
        section: "home",
    },
    NavItem {
        label: "About",
        section: "about",
    },
    NavItem {
        label: "Services",
        section: "services",
    },
    NavItem {
        label: "Contact",
        section: "contact",
    },
];

/// A headline figure animated with a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: 15,
        suffix: "+",
        label: "Years Experience",
    },
    Stat {
        value: 2500,
        suffix: "+",
        label: "Projects Completed",
    },
    Stat {
        value: 98,
        suffix: "%",
        label: "Client Satisfaction",
    },
    Stat {
        value: 50,
        suffix: "+",
        label: "Team Members",
    },
];

/// Compact figures shown under the hero image
pub const HERO_STATS: [Stat; 3] = [
    Stat {
        value: 15,
        suffix: "+",
        label: "Years Exp",
    },
    Stat {
        value: 2500,
        suffix: "+",
        label: "Projects",
    },
    Stat {
        value: 98,
        suffix: "%",
        label: "Satisfaction",
    },
];

/// An entry in the services catalog
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: [Service; 8] = [
    Service {
        icon: "cable",
        title: "Electrical Re-wiring",
        desc: "Complete electrical re-wiring services for HDB, condos, and landed properties.",
        features: [
            "Full House Re-wiring",
            "Partial Re-wiring",
            "Cable Upgrades",
            "Safety Compliance",
        ],
    },
    Service {
        icon: "zap",
        title: "Distribution Board (DB)",
        desc: "Professional DB box installation and component replacement including MCB, RCCB, ELR, and EFR.",
        features: [
            "DB Box Installation",
            "MCB Replacement",
            "RCCB Installation",
            "ELR/EFR Upgrade",
        ],
    },
    Service {
        icon: "lightbulb",
        title: "Light Fittings",
        desc: "Modern lighting solutions including LED lights, downlights, and track lights.",
        features: ["LED Lights", "Downlights", "Track Lights", "Feature Lighting"],
    },
    Service {
        icon: "fan",
        title: "Ceiling Fans",
        desc: "Expert ceiling fan installation and replacement services for all brands.",
        features: [
            "New Installation",
            "Fan Replacement",
            "All Brands",
            "Speed Control Setup",
        ],
    },
    Service {
        icon: "plug",
        title: "Power Sockets & Switches",
        desc: "Installation of electrical power sockets, switches, and isolators.",
        features: [
            "Power Sockets",
            "Light Switches",
            "Isolator Installation",
            "USB Outlets",
        ],
    },
    Service {
        icon: "droplets",
        title: "Water Heater",
        desc: "Professional installation of instant and storage water heaters.",
        features: [
            "Instant Heaters",
            "Storage Heaters",
            "Replacement",
            "Safety Check",
        ],
    },
    Service {
        icon: "cloud-lightning",
        title: "Lightning Protection",
        desc: "Comprehensive lightning protection system installation.",
        features: [
            "Risk Assessment",
            "System Design",
            "Installation",
            "Maintenance",
        ],
    },
    Service {
        icon: "earth",
        title: "Earthing System",
        desc: "Professional earthing system installation and testing.",
        features: [
            "Earth Rod Installation",
            "Earth Testing",
            "System Upgrade",
            "Compliance Check",
        ],
    },
];

/// A market segment served
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sector {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const SECTORS: [Sector; 3] = [
    Sector {
        icon: "home",
        title: "Residential",
        desc: "HDB flats, condominiums and landed homes, from single points to full re-wiring.",
    },
    Sector {
        icon: "building",
        title: "Commercial",
        desc: "Offices, retail shops and F&B outlets with minimal disruption to operations.",
    },
    Sector {
        icon: "factory",
        title: "Industrial",
        desc: "Warehouses and workshops with three-phase supply, DB upgrades and earthing.",
    },
];

/// A repeat customer category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CustomerType {
    pub icon: &'static str,
    pub name: &'static str,
}

pub const CUSTOMER_TYPES: [CustomerType; 4] = [
    CustomerType {
        icon: "building",
        name: "Property Managers",
    },
    CustomerType {
        icon: "utensils",
        name: "Restaurants & Cafes",
    },
    CustomerType {
        icon: "scissors",
        name: "Salons & Spas",
    },
    CustomerType {
        icon: "store",
        name: "Retail Shops",
    },
];

pub const TRUST_BADGES: [&str; 3] = ["Licensed & Insured", "EMA Registered", "BCA Approved"];

/// Services listed in the footer
pub const FOOTER_SERVICES: [&str; 6] = [
    "Electrical Re-wiring",
    "DB Installation",
    "Light Fittings",
    "Ceiling Fans",
    "Power Sockets",
    "Water Heaters",
];
