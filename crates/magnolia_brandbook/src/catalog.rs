//! Literal workbook content: sheet names, column widths, tables and diagrams.

use magnolia_io_xlsx::{
    C_COLOR_GOLD, C_COLOR_MAGNOLIA_WHITE, C_COLOR_MIDNIGHT_BLUE, C_COLOR_SAGE_GREEN,
    C_COLOR_WARM_GRAY, EnumStyleKey, SpecCellRange, SpecSheet, SpecTable, SpecWorkbook,
    XlsxBuildError,
};

/// Output file name used when the caller does not pick one.
pub const C_FILE_NAME_DEFAULT: &str = "MidnightMagnolia_Enhanced_WithDiagrams.xlsx";

/// One content sheet as embedded in source.
#[derive(Debug, Clone, Copy)]
pub struct SpecSheetLiteral {
    /// Sheet tab name.
    pub name: &'static str,
    /// `(column span, width)` hints, e.g. `("B:D", 30.0)`.
    pub widths: &'static [(&'static str, f64)],
    /// Header row followed by data rows.
    pub rows: &'static [&'static [&'static str]],
}

impl SpecSheetLiteral {
    /// Validate and convert into a writable sheet.
    pub fn to_sheet(&self) -> Result<SpecSheet, XlsxBuildError> {
        let table = SpecTable::from_rows(self.rows.iter().map(|row| row.iter().copied()))?;
        let mut sheet = SpecSheet::new(self.name).with_table(table);
        for (c_columns, n_width) in self.widths {
            sheet = sheet.with_column_width(c_columns, *n_width)?;
        }
        Ok(sheet)
    }
}

////////////////////////////////////////////////////////////////////////////////
// #region ContentSheets

pub const SHEET_AUTOMATIONS: SpecSheetLiteral = SpecSheetLiteral {
    name: "🌸 Automations",
    widths: &[("A:A", 40.0), ("B:D", 30.0)],
    rows: &[
        &["🤖 Automation Name", "⚡ Trigger", "🎯 Action", "🛠️ Tool"],
        &[
            "💌 New Lead Capture → Airtable Sync",
            "✨ New Contact in HubSpot or Form Submission",
            "📝 Create record in Airtable → Table: `Leads`",
            "🔧 Make.com or Zapier",
        ],
        &[
            "🔄 Airtable Update → HubSpot Sync",
            "📊 New/Updated Record in Airtable",
            "🎯 Find & update matching HubSpot contact",
            "🔧 Make.com or Zapier",
        ],
        &[
            "🚀 Product Launch Pipeline",
            "📦 New record in `Product Pipeline`",
            "💼 Create Deal + Tasks in HubSpot",
            "🔧 Make.com",
        ],
        &[
            "📧 Email Marketing Segmentation",
            "🏷️ Airtable Record with tags/tiers",
            "📮 Add to HubSpot email lists",
            "🔧 Make.com",
        ],
        &[
            "📅 Client Tracking (Calendly Flow)",
            "🗓️ New Booking in Calendly",
            "✅ Add to `Clients` + Update HubSpot",
            "🔧 Calendly → Make.com",
        ],
    ],
};

pub const SHEET_WORKFLOWS: SpecSheetLiteral = SpecSheetLiteral {
    name: "🌙 Automation Workflows",
    widths: &[("A:A", 35.0), ("B:E", 25.0)],
    rows: &[
        &[
            "🔮 Workflow Name",
            "⚡ Trigger Type",
            "🎬 Actions",
            "💰 Monthly Cost ($)",
            "📝 Integration Notes",
        ],
        &[
            "🔄 Airtable → Notion Sync",
            "⏰ Scheduled",
            "📊 Sync records to Notion DB",
            "10",
            "✅ Daily at midnight",
        ],
        &[
            "💌 HubSpot → Notion CRM",
            "🪝 Webhook",
            "📝 Capture lead → Add to CRM",
            "10",
            "⚡ Real-time sync",
        ],
        &[
            "📦 Shopify → Notion Inventory",
            "⏰ Scheduled",
            "📈 Update stock levels",
            "15",
            "🕐 Every 4 hours",
        ],
        &[
            "📧 Notion → Email Campaign",
            "🎯 Manual",
            "📮 Generate email list",
            "5",
            "🌸 Weekly sends",
        ],
        &[
            "📅 Calendly → Notion Tasks",
            "🪝 Webhook",
            "✅ Create task for booking",
            "10",
            "⚡ Instant creation",
        ],
        &[
            "🎨 Canva → Notion Content",
            "⏰ Scheduled",
            "🖼️ Sync design assets",
            "10",
            "🌙 Nightly backup",
        ],
        &[
            "💳 Stripe → Notion Revenue",
            "🪝 Webhook",
            "💰 Log transactions",
            "15",
            "✨ Payment tracking",
        ],
        &[
            "📊 Analytics → Notion Dashboard",
            "⏰ Scheduled",
            "📈 Update metrics",
            "20",
            "📅 Weekly reports",
        ],
        &[
            "🔗 URL Shortener → Notion",
            "🎯 Manual",
            "📎 Track link performance",
            "5",
            "🌸 Campaign tracking",
        ],
    ],
};

pub const SHEET_BRAND_INFO: SpecSheetLiteral = SpecSheetLiteral {
    name: "🌙 Brand Info",
    widths: &[("A:A", 25.0), ("B:B", 60.0)],
    rows: &[
        &["🌸 Field", "✨ Details"],
        &["💼 Business Name", "Midnight Magnolia"],
        &[
            "🎯 Mission Statement",
            "Empowering entrepreneurs to transform creativity into sustainable income through healing-centered, culturally-rooted digital solutions.",
        ],
        &["💫 Tagline", "Where Southern Gothic meets Digital Magic"],
        &["🌙 Brand Voice", "Gentle, poetic, mindful, ancestral, healing-centered"],
        &[
            "🎨 Visual Identity",
            "Southern Gothic aesthetic with magnolia blooms, crescent moons, and digital mysticism",
        ],
    ],
};

pub const SHEET_COLORS: SpecSheetLiteral = SpecSheetLiteral {
    name: "🎨 Colors",
    widths: &[("A:A", 20.0), ("B:B", 15.0), ("C:C", 30.0)],
    rows: &[
        &["🌈 Color Name", "🎨 HEX Code", "✨ Usage"],
        &["🌙 Midnight Blue", C_COLOR_MIDNIGHT_BLUE, "🖼️ Backgrounds, headers"],
        &["🌊 Midnight Teal", "#0A3B4D", "🎨 Gradients, accents"],
        &["🌸 Magnolia White", C_COLOR_MAGNOLIA_WHITE, "📝 Text, highlights"],
        &["🌿 Sage Green", C_COLOR_SAGE_GREEN, "🌱 CTAs, nature elements"],
        &["🤎 Warm Gray", C_COLOR_WARM_GRAY, "🏛️ Borders, subtle accents"],
        &["✨ Gold", C_COLOR_GOLD, "👑 Premium elements, sparkle"],
        &["💜 Deep Purple", "#4A1A5C", "🔮 Mystical elements"],
        &["🌑 Rich Black", "#0D0D0D", "📖 Body text"],
        &["🩸 Blood Orange", "#CC5500", "🔥 Urgent CTAs"],
        &["🥀 Dusty Rose", "#D4A5A5", "🌹 Gentle highlights"],
        &["🌫️ Misty Gray", "#B8B8B8", "☁️ Subtle backgrounds"],
        &["🌾 Antique Ivory", "#FFFFF0", "📜 Paper textures"],
    ],
};

pub const SHEET_IMAGE_PROMPTS: SpecSheetLiteral = SpecSheetLiteral {
    name: "📸 Image Prompts",
    widths: &[("A:A", 25.0), ("B:B", 50.0), ("C:C", 30.0)],
    rows: &[
        &["🎨 Title", "📝 Prompt", "🏷️ Theme Keywords"],
        &[
            "🏠 Homepage Hero",
            "Southern Gothic mansion with magnolia blooms, crescent moon, misty midnight atmosphere, Spanish moss draping",
            "🌙 southern gothic, spiritual tech, heritage",
        ],
        &[
            "📚 Product Spotlight",
            "Magnolia journal on antique lace tablecloth, digital tablet showing mystical interface, gold accents, candles",
            "✨ healing, journaling, digital entrepreneur",
        ],
        &[
            "👥 Community Banner",
            "Diverse hands holding magnolia petals, moonlight streaming, digital constellation overlay",
            "🤝 community, ancestral wisdom, connection",
        ],
        &[
            "📧 Email Header",
            "Midnight sky with magnolia constellation, subtle tech grid pattern, ethereal glow",
            "💌 newsletter, mystical, professional",
        ],
        &[
            "🛍️ Shop Collection",
            "Victorian writing desk with modern devices, magnolia in crystal vase, tarot cards, golden hour light",
            "🎯 products, blend old/new, magical realism",
        ],
    ],
};

pub const SHEET_SOCIAL_MEDIA: SpecSheetLiteral = SpecSheetLiteral {
    name: "📱 Social Media",
    widths: &[("A:A", 20.0), ("B:B", 45.0), ("C:C", 35.0)],
    rows: &[
        &["🌐 Platform", "🔗 Handle/URL", "💫 Use Case"],
        &["📸 Instagram", "@noirmagnoliasc", "🎥 Visual storytelling, brand aesthetics"],
        &["👤 Facebook", "facebook.com/midnightmagnoliasc", "🏘️ Community engagement, events"],
        &["🎥 YouTube", "@poetrygirl1013", "📚 Long-form content, tutorials"],
        &["💼 LinkedIn", "linkedin.com/in/latishavwaters", "👔 Professional networking"],
        &["🎨 Patreon", "patreon.com/MidnightMagnoliaSC", "💝 Exclusive content, memberships"],
        &["📝 Tumblr", "midnight-magnoliasc.tumblr.com", "✍️ Blog posts, mood boards"],
        &["🐦 X/Twitter", "@bgconscious", "💭 Quick updates, engagement"],
        &["💻 GitHub", "github.com/Rumi1013", "🔧 Code projects, templates"],
        &[
            "🎓 Fellowship",
            "opensocietyfoundations.org/fellows/latisha-vincent",
            "🌟 Professional achievements",
        ],
    ],
};

pub const SHEET_CONTACT_INFO: SpecSheetLiteral = SpecSheetLiteral {
    name: "📧 Contact Info",
    widths: &[("A:A", 20.0), ("B:B", 45.0)],
    rows: &[
        &["📧 Type", "✉️ Address"],
        &["💼 Business", "latisha@midnight-magnolia.com"],
        &["👤 Personal", "bgconscious@gmail.com"],
        &["🎓 Academic", "latishavincentwaters@my.tridenttech.edu"],
    ],
};

pub const SHEET_BRAND_BOARD: SpecSheetLiteral = SpecSheetLiteral {
    name: "🎨 Brand Board",
    widths: &[("A:A", 20.0), ("B:B", 60.0)],
    rows: &[
        &["🏷️ Category", "✨ Details"],
        &["💼 Business Name", "Midnight Magnolia"],
        &["🌙 Tagline", "A Southern Gothic Digital Sanctuary"],
        &["🎭 Brand Personality", "Mystical Mentor, Digital Priestess, Southern Sage"],
        &["🎯 Target Audience", "Soul-led entrepreneurs seeking healing-centered tech solutions"],
        &["🌸 Core Values", "Liberation • Ancestral Wisdom • Digital Sovereignty • Gentle Growth"],
        &["💫 Brand Promise", "Transform your creative gifts into sustainable abundance"],
    ],
};

pub const SHEET_PRODUCTS: SpecSheetLiteral = SpecSheetLiteral {
    name: "💰 Products",
    widths: &[("A:A", 35.0), ("B:B", 10.0), ("C:C", 50.0)],
    rows: &[
        &["📦 Product Name", "💵 Price", "📝 Description"],
        &[
            "🚀 Digital Entrepreneur Starter Kit",
            "$37",
            "📊 Business plan template, content calendar, income tracker, automation guide",
        ],
        &[
            "🎨 Brand Identity Workbook",
            "$29",
            "🌸 Visual identity guide, voice development, cultural brand mapping",
        ],
        &[
            "🔮 Tech Witch Toolkit",
            "$47",
            "⚡ Automation templates, mystical tech guide, digital ritual practices",
        ],
        &[
            "📚 Content Creation Codex",
            "$27",
            "✍️ 30 days of prompts, SEO spells, storytelling templates",
        ],
        &["💎 Premium Bundle", "$97", "✨ All products + bonus meditation tracks + 1:1 setup call"],
    ],
};

pub const SHEET_MEMBERSHIP_TIERS: SpecSheetLiteral = SpecSheetLiteral {
    name: "📚 Membership Tiers",
    widths: &[("A:A", 20.0), ("B:B", 10.0), ("C:C", 50.0)],
    rows: &[
        &["🌟 Tier Name", "💰 Price", "🎁 Perks"],
        &[
            "🌱 Magnolia Seed",
            "$3",
            "✨ Monthly affirmations, digital wallpapers, community access",
        ],
        &["🌙 Crescent Bloom", "$7", "🔮 Tarot previews, blog access, monthly meditation"],
        &["⭐ Midnight Star", "$17", "📚 All digital products, workshops, priority support"],
        &["👑 Sovereign Soul", "$47", "🎯 Everything + monthly 1:1, custom automations"],
        &[
            "🌺 Legacy Builder",
            "$97",
            "💎 White-glove support, done-for-you setups, quarterly strategy",
        ],
    ],
};

pub const SHEET_AUTOMATION_SPECS: SpecSheetLiteral = SpecSheetLiteral {
    name: "⚙️ Automation Specs",
    widths: &[("A:F", 20.0)],
    rows: &[
        &["💻 System", "🎯 Function", "🔧 Platform", "⏰ Frequency", "⚡ Trigger", "📤 Output"],
        &[
            "📝 Notion",
            "🔄 Dashboard sync",
            "🔧 Make.com",
            "📅 Daily",
            "⏰ 12AM EST",
            "📊 Updated metrics",
        ],
        &[
            "🛍️ Shopify",
            "📦 New product push",
            "🔧 Make.com",
            "⚡ Real-time",
            "➕ Product created",
            "📢 Social posts",
        ],
        &[
            "📧 ConvertKit",
            "💌 Welcome sequence",
            "🔧 Native",
            "⚡ Instant",
            "📝 Form submit",
            "💕 5-email series",
        ],
        &[
            "📊 Airtable",
            "📈 Analytics compile",
            "🔧 Zapier",
            "📅 Weekly",
            "📆 Sundays 6PM",
            "📑 PDF report",
        ],
    ],
};

pub const SHEET_LOGOS: SpecSheetLiteral = SpecSheetLiteral {
    name: "🖼️ Logos + Alt Info",
    widths: &[("A:A", 30.0), ("B:B", 50.0), ("C:C", 25.0)],
    rows: &[
        &["📁 Image File Name", "♿ Alt Text", "🎯 Use Case"],
        &[
            "🌙 MM_Crest_Primary.jpg",
            "Midnight Magnolia crest: magnolia bloom with crescent moon in antique frame",
            "🖥️ Website header, print",
        ],
        &[
            "✨ MM_Icon_Gold.png",
            "Gold magnolia bloom icon with mystical sparkles",
            "📱 Social profiles, favicon",
        ],
        &[
            "🌸 MM_Wordmark.svg",
            "Midnight Magnolia in elegant serif font with moon phases",
            "📄 Documents, invoices",
        ],
        &[
            "💜 MM_Pattern_Dark.png",
            "Repeating pattern of moons and magnolias on midnight blue",
            "🎨 Backgrounds, packaging",
        ],
        &[
            "🌿 MM_Submark.png",
            "MM initials intertwined with botanical elements",
            "📧 Email signatures",
        ],
        &[
            "👑 MM_Badge_Premium.png",
            "Ornate circular badge with magnolia and \"Premium Member\" text",
            "💎 Membership materials",
        ],
        &[
            "🔮 MM_Watermark.png",
            "Subtle magnolia bloom watermark at 20% opacity",
            "📸 Photo overlays",
        ],
    ],
};

pub const SHEET_SERVICES: SpecSheetLiteral = SpecSheetLiteral {
    name: "💼 Services",
    widths: &[("A:A", 25.0), ("B:B", 12.0), ("C:C", 35.0), ("D:D", 15.0), ("E:E", 25.0)],
    rows: &[
        &["🎨 Service", "💰 Price", "📝 Description", "📊 Type", "📋 Booking"],
        &[
            "🖥️ Web Design Package",
            "$699+",
            "✨ Custom Wix/Shopify design with your soul essence",
            "🎯 Project",
            "📝 Request form",
        ],
        &[
            "⚡ Automation Setup",
            "$499+",
            "🔧 Make.com flows and template installation",
            "🛠️ Service",
            "📅 Calendly",
        ],
        &[
            "🌸 Brand Strategy Session",
            "$249",
            "🎯 Clarity mapping + visual system development",
            "💭 Consultation",
            "📞 Discovery call",
        ],
        &[
            "📚 VIP Day",
            "$1,497",
            "🌟 6-hour intensive: full setup + training",
            "⏰ Intensive",
            "📋 Application",
        ],
        &[
            "🌙 Monthly Retainer",
            "$897",
            "♾️ Ongoing support, updates, and optimization",
            "🔄 Recurring",
            "📄 Contract",
        ],
    ],
};

pub const SHEET_JUSTICE_RESOURCES: SpecSheetLiteral = SpecSheetLiteral {
    name: "⚖️ Justice Resources",
    widths: &[("A:A", 25.0), ("B:B", 15.0), ("C:C", 25.0), ("D:D", 35.0), ("E:E", 30.0)],
    rows: &[
        &[
            "📚 Resource Name",
            "📄 Type",
            "🎯 Focus Area",
            "🔗 Website/Link",
            "🔧 Integration Notes",
        ],
        &[
            "✊ Expungement Guide",
            "📑 PDF",
            "🔓 Post-Incarceration",
            "midnightmagnolia.com/expunge",
            "📧 Email gate for download",
        ],
        &[
            "📜 Pardon Application Help",
            "🌐 Webpage",
            "🕊️ Reentry Support",
            "midnightmagnolia.com/pardon",
            "🔒 Member-only access",
        ],
        &[
            "💼 Job Search Toolkit",
            "📦 Bundle",
            "💰 Economic Justice",
            "midnightmagnolia.com/jobs",
            "🎁 Free with tier 3+",
        ],
        &[
            "🏛️ Know Your Rights",
            "🎥 Video Series",
            "⚖️ Legal Education",
            "members.midnightmagnolia.com",
            "📺 Drip content monthly",
        ],
        &[
            "🤝 Community Directory",
            "📊 Database",
            "🌍 Mutual Aid",
            "midnightmagnolia.com/community",
            "🔄 User-submitted",
        ],
    ],
};

/// Content sheets in tab order.
pub const L_CONTENT_SHEETS: [SpecSheetLiteral; 14] = [
    SHEET_AUTOMATIONS,
    SHEET_WORKFLOWS,
    SHEET_BRAND_INFO,
    SHEET_COLORS,
    SHEET_IMAGE_PROMPTS,
    SHEET_SOCIAL_MEDIA,
    SHEET_CONTACT_INFO,
    SHEET_BRAND_BOARD,
    SHEET_PRODUCTS,
    SHEET_MEMBERSHIP_TIERS,
    SHEET_AUTOMATION_SPECS,
    SHEET_LOGOS,
    SHEET_SERVICES,
    SHEET_JUSTICE_RESOURCES,
];

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Diagrams
//
// Written into their merged ranges byte for byte, leading newline and indent included.

pub const C_WORKFLOW_DIAGRAM: &str = concat!(
    "\n",
    "    ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐\n",
    "    │  🎯 TRIGGER     │ ──→ │  🔧 MAKE.COM    │ ──→ │  📊 OUTPUT      │\n",
    "    │                 │     │                 │     │                 │\n",
    "    │ • Webhook       │     │ • Data Transform│     │ • Notion DB     │\n",
    "    │ • Schedule      │     │ • Filtering     │     │ • Email List    │\n",
    "    │ • Manual        │     │ • Routing       │     │ • Reports       │\n",
    "    └─────────────────┘     └─────────────────┘     └─────────────────┘\n",
    "    ",
);

pub const C_ECOSYSTEM_DIAGRAM: &str = concat!(
    "\n",
    "    🌙 MIDNIGHT MAGNOLIA AUTOMATION ECOSYSTEM 🌸\n",
    "    \n",
    "    ┌─────────────┐     ┌─────────────┐     ┌─────────────┐\n",
    "    │ 📥 INPUTS   │     │ 🔧 PROCESS  │     │ 📤 OUTPUTS  │\n",
    "    ├─────────────┤     ├─────────────┤     ├─────────────┤\n",
    "    │ • Forms     │ ──→ │ • Make.com  │ ──→ │ • Notion    │\n",
    "    │ • Calendly  │     │ • Zapier    │     │ • Email     │\n",
    "    │ • Shopify   │     │ • Webhooks  │     │ • Airtable  │\n",
    "    │ • Social    │     │ • APIs      │     │ • Reports   │\n",
    "    └─────────────┘     └─────────────┘     └─────────────┘\n",
    "             ↓                   ↓                   ↓\n",
    "    ✨ Gentle automation that honors your energy ✨\n",
    "    ",
);

pub const C_JOURNEY_DIAGRAM: &str = concat!(
    "\n",
    "    🌱 SEED (Awareness)          🌸 BLOOM (Engagement)        🌙 HARVEST (Transformation)\n",
    "    │                            │                            │\n",
    "    ├─ Social Media              ├─ Email Nurture            ├─ Premium Membership\n",
    "    ├─ Blog Content              ├─ Free Resources           ├─ 1:1 Services  \n",
    "    ├─ SEO Magic                 ├─ Community Access         ├─ Automation Setup\n",
    "    │                            │                            │\n",
    "    └────────────────────────────┴────────────────────────────┘\n",
    "                        ✨ Guided by ancestral wisdom ✨\n",
    "    ",
);

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Assembly

/// Content sheets with their diagrams attached.
pub fn derive_content_sheets() -> Result<Vec<SpecSheet>, XlsxBuildError> {
    let mut l_sheets = Vec::with_capacity(L_CONTENT_SHEETS.len());
    for literal in &L_CONTENT_SHEETS {
        let mut sheet = literal.to_sheet()?;
        if literal.name == SHEET_WORKFLOWS.name {
            sheet = sheet.with_diagram(
                Some("🌸 Workflow Diagram:"),
                SpecCellRange::new(13, 0, 20, 4)?,
                C_WORKFLOW_DIAGRAM,
            )?;
        } else if literal.name == SHEET_AUTOMATION_SPECS.name {
            sheet = sheet.with_diagram(
                Some("🌸 Master Automation Flow:"),
                SpecCellRange::new(8, 0, 16, 5)?,
                C_ECOSYSTEM_DIAGRAM,
            )?;
        }
        l_sheets.push(sheet);
    }
    Ok(l_sheets)
}

/// Summary sheet: title banner, quick stats row, journey map.
pub fn derive_dashboard_sheet() -> Result<SpecSheet, XlsxBuildError> {
    let l_stats = [
        "💰 Products: 5",
        "🌟 Tiers: 5",
        "💼 Services: 5",
        "⚡ Automations: 6",
    ];

    let mut sheet = SpecSheet::new("🌟 Dashboard")
        .with_column_width("A:D", 25.0)?
        .with_merged(
            SpecCellRange::new(0, 0, 0, 3)?,
            "🌙 MIDNIGHT MAGNOLIA DASHBOARD 🌸",
            EnumStyleKey::Header,
        )
        .with_cell(2, 0, "📊 Quick Stats", EnumStyleKey::Header);
    for (col_idx, c_stat) in l_stats.into_iter().enumerate() {
        sheet = sheet.with_cell(3, col_idx, c_stat, EnumStyleKey::Accent);
    }

    sheet.with_diagram(
        Some("🗺️ Brand Journey Map"),
        SpecCellRange::new(6, 0, 14, 3)?,
        C_JOURNEY_DIAGRAM,
    )
}

/// Full workbook: content sheets followed by the dashboard.
pub fn derive_brandbook() -> Result<SpecWorkbook, XlsxBuildError> {
    let mut l_sheets = derive_content_sheets()?;
    l_sheets.push(derive_dashboard_sheet()?);
    Ok(SpecWorkbook {
        file_name: C_FILE_NAME_DEFAULT.to_string(),
        sheets: l_sheets,
    })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
