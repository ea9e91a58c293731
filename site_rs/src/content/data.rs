//! The live site copy.

use chrono::NaiveDate;

use super::*;

fn intro(eyebrow: &str, title: &str, description: Option<&str>) -> SectionIntro {
    SectionIntro {
        eyebrow: eyebrow.into(),
        title: title.into(),
        description: description.map(Into::into),
    }
}

fn card(icon: IconKind, title: &str, description: &str) -> Card {
    Card {
        icon,
        title: title.into(),
        description: description.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(super) fn ghost_protocol() -> SiteContent {
    SiteContent {
        brand: Brand {
            name: "Ghost Protocol".into(),
            logo: Image {
                src: "/images/gp.jpg".into(),
                alt: "Ghost Protocol".into(),
            },
        },
        nav: vec![
            Link::new("Services", "/#services"),
            Link::new("Portfolio", "/portfolio"),
            Link::new("Knowledge", "/knowledge"),
            Link::new("About", "/#about"),
            Link::new("Contact", "/#contact"),
        ],
        nav_cta: Link::new("Get in Touch", "/#contact"),
        hero: hero(),
        about: about(),
        features_intro: intro(
            "Why Choose Us",
            "Built on Trust, Delivered with Excellence",
            Some(
                "We combine technical excellence, innovative thinking, and customer-centric values \
                 to deliver premium solutions that drive real business results.",
            ),
        ),
        features: features(),
        services_intro: intro(
            "Our Services",
            "Web Development, App Development & Lead Generation",
            Some(
                "We combine cutting-edge development with strategic lead generation to help your \
                 business grow. From stunning websites to powerful applications and ethical lead \
                 generation strategies, we deliver comprehensive solutions.",
            ),
        ),
        services: services(),
        portfolio_intro: intro(
            "Our Work",
            "Featured Projects",
            Some(
                "A selection of recent projects we have delivered for clients across various \
                 industries. Each solution is tailored to meet specific business requirements and \
                 drive measurable results.",
            ),
        ),
        projects: projects(),
        stats_intro: intro("By the Numbers", "Building Trust Through Results", None),
        stats: stats(),
        knowledge_intro: intro(
            "Knowledge Base",
            "Resources & Educational Content",
            Some(
                "Comprehensive guides, tutorials, and insights on web development, security, \
                 design, and business strategy. A curated resource for learning and reference.",
            ),
        ),
        categories: categories(),
        articles: articles(),
        faq_intro: intro(
            "Questions",
            "What Clients Usually Ask",
            Some("Straight answers to the things people ask us before a project starts."),
        ),
        faq: faq(),
        contact_intro: intro(
            "Get in Touch",
            "Ready to Transform Your Business?",
            Some(
                "Our team is ready to discuss your project requirements and craft a strategic \
                 solution tailored to your needs. Let's build something exceptional together.",
            ),
        ),
        contact: ContactInfo {
            address: "30, Beddagana South, Pitakotte, Colombo 05, Sri Lanka".into(),
            email: "ghosts.lk@proton.me".into(),
            phone: "+94 77 106 2770".into(),
        },
        footer: footer(),
    }
}

fn hero() -> HeroContent {
    HeroContent {
        badge: "Welcome to Excellence".into(),
        title: "Enterprise Solutions".into(),
        title_accent: "Built for Impact".into(),
        description: "Premium IT solutions powered by cutting-edge open-source technology. Web \
                      development, creative design, and enterprise IT services crafted with \
                      precision and delivered with excellence."
            .into(),
        primary_cta: Link::new("Start Your Project", "/#contact"),
        secondary_cta: Link::new("View Our Work", "/portfolio"),
        highlights: vec![
            Highlight {
                icon: IconKind::Code,
                label: "Web Development".into(),
            },
            Highlight {
                icon: IconKind::Paintbrush,
                label: "Creative Design".into(),
            },
            Highlight {
                icon: IconKind::Wrench,
                label: "IT Troubleshooting".into(),
            },
        ],
        image: Image {
            src: "/images/hero-logo.png".into(),
            alt: "Ghost Protocol - Precision. Privacy. Performance.".into(),
        },
    }
}

fn about() -> AboutContent {
    AboutContent {
        intro: intro("About Us", "A Small Team That Gets Things Done", None),
        paragraphs: strings(&[
            "Ghost Protocol is a Colombo-based development team that's been helping Sri Lankan \
             businesses build their digital presence since 2019. We're small by choice, which \
             means every project gets our full attention.",
            "We specialize in websites, web applications, and business software. Our approach is \
             straightforward: we listen to what you need, tell you honestly what's possible within \
             your budget, and then we build it properly.",
        ]),
        cta: Link::new("Why Choose Us", "/#features"),
        image: Image {
            src: "/images/gp.jpg".into(),
            alt: "Ghost Protocol Logo".into(),
        },
    }
}

fn features() -> Vec<Card> {
    vec![
        card(
            IconKind::CheckCircle,
            "Honest Assessments",
            "We tell you what you actually need, not what makes us more money. Sometimes that \
             means recommending simpler solutions.",
        ),
        card(
            IconKind::Zap,
            "Reliable Delivery",
            "We give realistic timelines and stick to them. If something changes, you'll know \
             immediately. No surprises.",
        ),
        card(
            IconKind::Shield,
            "Built to Last",
            "We use proven technologies and write clean code. Your website will still work well \
             three years from now.",
        ),
        card(
            IconKind::Globe,
            "No Vendor Lock-in",
            "Everything we build is yours. Full access to code, hosting credentials, and \
             documentation. Leave anytime with everything.",
        ),
        card(
            IconKind::Users,
            "Direct Communication",
            "You talk to the people actually building your project. No account managers, no game \
             of telephone.",
        ),
        card(
            IconKind::Award,
            "Local Understanding",
            "We understand Sri Lankan businesses, payment gateways, hosting infrastructure, and \
             what actually works here.",
        ),
    ]
}

fn services() -> Vec<Card> {
    vec![
        card(
            IconKind::Globe,
            "Website Development",
            "Custom websites built with modern open-source technologies. Fast, responsive, and \
             conversion-optimized.",
        ),
        card(
            IconKind::Code,
            "App Development",
            "Full-stack mobile and web applications using cutting-edge frameworks. Scalable and \
             feature-rich.",
        ),
        card(
            IconKind::TrendingUp,
            "Lead Generation",
            "Strategic lead generation and digital marketing solutions to grow your qualified \
             prospect pipeline ethically.",
        ),
        card(
            IconKind::Wrench,
            "IT Troubleshooting",
            "Quick diagnosis and resolution of hardware, software, and network issues. We fix \
             what's broken.",
        ),
        card(
            IconKind::Monitor,
            "System Setup & Config",
            "Professional setup of workstations, servers, and development environments tailored \
             to your needs.",
        ),
        card(
            IconKind::Settings,
            "Maintenance & Support",
            "Ongoing technical support and maintenance to keep your systems running smoothly \
             24/7.",
        ),
    ]
}

fn projects() -> Vec<PortfolioProject> {
    vec![
        PortfolioProject {
            id: "educational-portal".into(),
            title: "Educational Institution Portal".into(),
            category: "Education".into(),
            description: "A comprehensive student management system for a leading private school, \
                          featuring online enrollment, parent portals, fee management, and \
                          integrated examination results publishing."
                .into(),
            image: "/portfolio/education-portal.jpg".into(),
            features: strings(&[
                "Student Portal",
                "Parent Dashboard",
                "Fee Management",
                "Exam Results",
                "Attendance Tracking",
            ]),
            technologies: strings(&["Next.js", "PostgreSQL", "React", "Node.js"]),
            client: "Private Educational Institution".into(),
            year: "2024".into(),
            challenge: "The institution needed to modernize their paper-based student management \
                        system. They required a unified platform where parents could track their \
                        children's academic progress, pay fees online, and communicate with \
                        teachers."
                .into(),
            solution: "We developed a custom web application with role-based access for students, \
                       parents, teachers, and administrators. The system features automated fee \
                       reminders, real-time attendance tracking, digital grade books, and a parent \
                       communication portal."
                .into(),
            results: strings(&[
                "Reduced administrative workload by 40%",
                "Online fee collection increased to 85%",
                "Parent engagement improved by 60%",
                "2,500+ active student accounts",
            ]),
        },
        PortfolioProject {
            id: "clinic-management-system".into(),
            title: "Multi-Branch Clinic System".into(),
            category: "Healthcare".into(),
            description: "A comprehensive clinic management system serving multiple branches, \
                          streamlining patient care and administrative operations across \
                          locations."
                .into(),
            image: "/portfolio/clinic-system.jpg".into(),
            features: strings(&[
                "Appointment Booking",
                "Doctor Profiles",
                "Lab Results Portal",
                "Insurance Claims",
                "SMS Reminders",
            ]),
            technologies: strings(&["React", "Node.js", "MongoDB", "Twilio"]),
            client: "Healthcare Network".into(),
            year: "2023".into(),
            challenge: "The clinic network needed a unified system to manage appointments across \
                        multiple branches, reduce no-shows, and provide patients with secure \
                        access to their lab results."
                .into(),
            solution: "We built a patient portal with online booking, automated SMS reminders, and \
                       a secure lab results viewer. The system integrates with their existing HMS \
                       via custom APIs."
                .into(),
            results: strings(&[
                "No-show rate reduced by 35%",
                "Patient satisfaction improved to 4.7/5",
                "Lab results access time reduced to instant",
                "Serving 15,000+ patients monthly",
            ]),
        },
        PortfolioProject {
            id: "real-estate-platform".into(),
            title: "Property Listing Platform".into(),
            category: "Real Estate".into(),
            description: "A modern property listing platform helping home buyers and renters find \
                          their perfect property with immersive virtual tours and advanced search \
                          capabilities."
                .into(),
            image: "/portfolio/real-estate-platform.jpg".into(),
            features: strings(&[
                "360 Virtual Tours",
                "WhatsApp Integration",
                "Price Comparison",
                "Agent Portal",
                "Lead Management",
            ]),
            technologies: strings(&["Next.js", "Google Maps API", "PostgreSQL", "WhatsApp API"]),
            client: "Real Estate Agency".into(),
            year: "2024".into(),
            challenge: "The agency wanted to differentiate themselves in a competitive market with \
                        a platform showcasing properties with virtual tours, integrated lead \
                        capture, and tools for agents."
                .into(),
            solution: "We developed a property platform with 360-degree virtual tours, advanced \
                       search filters, WhatsApp click-to-chat integration, and a comprehensive \
                       agent dashboard."
                .into(),
            results: strings(&[
                "Lead generation increased by 200%",
                "Average time on site: 4.5 minutes",
                "500+ active property listings",
                "WhatsApp inquiries up 150%",
            ]),
        },
        PortfolioProject {
            id: "resort-booking-platform".into(),
            title: "Luxury Resort Booking System".into(),
            category: "Hospitality".into(),
            description: "A luxury booking platform for an exclusive beach resort, featuring \
                          stunning visuals and seamless reservation management with channel \
                          integration."
                .into(),
            image: "/portfolio/resort-booking.jpg".into(),
            features: strings(&[
                "Multi-Currency Payments",
                "Channel Manager",
                "Guest Portal",
                "Reviews Integration",
                "Dynamic Pricing",
            ]),
            technologies: strings(&["Next.js", "Stripe", "Booking.com API", "Node.js"]),
            client: "Boutique Resort".into(),
            year: "2023".into(),
            challenge: "The resort needed a booking website that reflected their luxury \
                        positioning while managing reservations across multiple channels with \
                        dynamic pricing."
                .into(),
            solution: "We created an elegant booking website with high-quality imagery, \
                       multi-currency payment support, and a custom channel manager that syncs \
                       availability across platforms."
                .into(),
            results: strings(&[
                "Direct bookings increased by 45%",
                "Channel management errors eliminated",
                "Average booking value up 20%",
                "4.9/5 guest satisfaction rating",
            ]),
        },
        PortfolioProject {
            id: "security-audit-platform".into(),
            title: "Enterprise Security Audit Platform".into(),
            category: "Cybersecurity".into(),
            description: "A security auditing and compliance management platform for enterprise \
                          clients, enabling continuous vulnerability assessments, penetration \
                          testing documentation, and compliance reporting."
                .into(),
            image: "/portfolio/security-audit.jpg".into(),
            features: strings(&[
                "Vulnerability Scanning",
                "Compliance Reporting",
                "Penetration Testing Tools",
                "Risk Assessment",
                "Audit Trails",
            ]),
            technologies: strings(&["Next.js", "Python", "PostgreSQL", "Docker"]),
            client: "Enterprise Client".into(),
            year: "2024".into(),
            challenge: "The enterprise struggled with fragmented security tools, inconsistent \
                        compliance documentation, and no way to track remediation across \
                        multiple teams and systems."
                .into(),
            solution: "We developed an integrated audit platform with automated vulnerability \
                       scanning, reporting, team collaboration tools, and compliance tracking \
                       across all infrastructure components."
                .into(),
            results: strings(&[
                "Security audit time reduced by 75%",
                "Compliance documentation fully automated",
                "Vulnerability remediation tracked in real-time",
                "Supporting 500+ infrastructure assets",
            ]),
        },
    ]
}

fn stats() -> Vec<Stat> {
    let stat = |value: &str, label: &str, description: &str| Stat {
        value: value.into(),
        label: label.into(),
        description: Some(description.into()),
    };
    vec![
        stat(
            "85+",
            "Projects Completed",
            "Successful projects completed across various industries",
        ),
        stat(
            "70%",
            "Repeat Clients",
            "Businesses and individuals who return for more work",
        ),
        stat(
            "3",
            "Years in Business",
            "Established track record of reliable service",
        ),
        stat(
            "4H",
            "Average Response Time",
            "Quick and reliable support when you need it",
        ),
    ]
}

fn categories() -> Vec<KnowledgeCategory> {
    let category = |id: &str, name: &str, icon: IconKind, description: &str| KnowledgeCategory {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        icon,
    };
    vec![
        category(
            "web-development",
            "Web Development",
            IconKind::Code,
            "Guides on modern web development practices, frameworks, and tooling.",
        ),
        category(
            "business-strategy",
            "Business Strategy",
            IconKind::TrendingUp,
            "Strategic insights for digital transformation and online business growth.",
        ),
        category(
            "security",
            "Security",
            IconKind::Shield,
            "Enterprise security, network protection, identity management, incident response \
             and compliance.",
        ),
        category(
            "digital-marketing",
            "Digital Marketing",
            IconKind::Target,
            "Practical marketing strategies for reaching and converting your target audience.",
        ),
        category(
            "technology-infrastructure",
            "Technology Infrastructure",
            IconKind::Layers,
            "Guides on hosting, servers, databases, and maintaining reliable systems.",
        ),
        category(
            "project-management",
            "Project Management",
            IconKind::CheckSquare,
            "Planning, executing, and delivering successful projects.",
        ),
    ]
}

fn articles() -> Vec<KnowledgeArticle> {
    let article = |id: &str,
                   title: &str,
                   excerpt: &str,
                   category: &str,
                   author: &str,
                   published: NaiveDate,
                   read_time: &str,
                   image: &str,
                   tags: &[&str]| KnowledgeArticle {
        id: id.into(),
        title: title.into(),
        excerpt: excerpt.into(),
        category: category.into(),
        author: author.into(),
        date: published,
        read_time: read_time.into(),
        image: Some(image.into()),
        tags: strings(tags),
        featured: false,
    };

    let mut articles = vec![
        article(
            "choosing-right-technology-stack",
            "How to Choose the Right Technology Stack for Your Project",
            "A guide to evaluating and selecting technologies that align with your business \
             goals, budget, and long-term maintainability requirements.",
            "web-development",
            "Development Team",
            date(2025, 1, 15),
            "12 min read",
            "/resources/web-development-guide.jpg",
            &["Technology", "Planning", "Architecture"],
        ),
        article(
            "responsive-design-best-practices",
            "Responsive Design: Building for Every Screen Size",
            "The principles and techniques of responsive web design for websites that work well \
             on every device.",
            "web-development",
            "Development Team",
            date(2025, 1, 10),
            "10 min read",
            "/resources/design-services.jpg",
            &["Design", "CSS", "Mobile"],
        ),
        article(
            "digital-presence-small-business",
            "Building a Digital Presence for Small Businesses",
            "A strategic guide for small business owners on establishing and growing their online \
             presence within budget constraints.",
            "business-strategy",
            "Strategy Team",
            date(2025, 1, 12),
            "9 min read",
            "/resources/cloud-solutions.jpg",
            &["Small Business", "Strategy", "Growth"],
        ),
        article(
            "measuring-website-roi",
            "Measuring Website ROI: Metrics That Actually Matter",
            "Which numbers tell you whether your website is paying for itself, and which ones are \
             noise.",
            "business-strategy",
            "Strategy Team",
            date(2024, 12, 8),
            "8 min read",
            "/resources/analytics-insights.jpg",
            &["Analytics", "ROI", "Business Intelligence"],
        ),
        article(
            "website-security-fundamentals",
            "Website Security Fundamentals for Business Owners",
            "Essential security practices every business owner should understand to protect \
             their website, customer data, and reputation.",
            "security",
            "Security Team",
            date(2025, 1, 8),
            "11 min read",
            "/resources/cybersecurity-solutions.jpg",
            &["Security", "Small Business"],
        ),
        article(
            "enterprise-security-audit-guide",
            "Enterprise Security Audit: A Complete Implementation Guide",
            "Planning, conducting, and reporting enterprise security audits, including \
             frameworks, methodologies, and compliance practices.",
            "security",
            "Security Team",
            date(2025, 1, 18),
            "18 min read",
            "/resources/security-audit-enterprise.jpg",
            &["Audit", "Compliance", "Enterprise"],
        ),
        article(
            "network-security-fundamentals",
            "Network Security Fundamentals: Protecting Your Infrastructure",
            "Firewalls, intrusion detection, network segmentation, and zero-trust architecture \
             explained for people who run networks.",
            "security",
            "Security Team",
            date(2025, 1, 16),
            "16 min read",
            "/resources/network-security.jpg",
            &["Network", "Infrastructure", "Zero Trust"],
        ),
        article(
            "choosing-hosting-provider",
            "Choosing a Hosting Provider Without Regrets",
            "Shared, VPS, managed or cloud: what each option costs you in money, time, and risk.",
            "technology-infrastructure",
            "Development Team",
            date(2024, 11, 20),
            "9 min read",
            "/resources/infrastructure-setup.jpg",
            &["Hosting", "Infrastructure"],
        ),
    ];

    for article in &mut articles {
        article.featured = matches!(
            article.id.as_str(),
            "choosing-right-technology-stack" | "website-security-fundamentals"
        );
    }
    articles
}

fn faq() -> Vec<DisclosureEntry> {
    vec![
        DisclosureEntry::new(
            "How long does a typical website take?",
            "A brochure site usually takes four to six weeks from kickoff to launch. Web \
             applications are scoped individually; you get a written timeline before any work \
             starts.",
        ),
        DisclosureEntry::new(
            "Who owns the code and hosting accounts?",
            "You do. Source code, hosting credentials, domain and documentation are handed over \
             at launch, and you can leave at any time with everything.",
        ),
        DisclosureEntry::new(
            "Do you work with businesses outside Colombo?",
            "Yes. Most of our communication happens over calls and chat, and we regularly work \
             with clients across Sri Lanka and abroad.",
        ),
        DisclosureEntry::new(
            "What happens after launch?",
            "Every project includes a support period for fixes. After that, maintenance plans \
             cover updates, backups, monitoring and small changes.",
        ),
        DisclosureEntry::new(
            "Can you take over an existing website?",
            "Usually. We start with an honest assessment of the current code and hosting, then \
             recommend whether to maintain, improve, or rebuild.",
        ),
    ]
}

fn footer() -> FooterContent {
    FooterContent {
        blurb: "Premium web development and IT solutions from Colombo, Sri Lanka. We craft \
                websites, applications, and business software that drive results."
            .into(),
        services: vec![
            Link::new("Web Development", "/#services"),
            Link::new("App Development", "/#services"),
            Link::new("Business Software", "/#services"),
            Link::new("IT Support", "/#services"),
        ],
        company: vec![
            Link::new("About Us", "/#about"),
            Link::new("Portfolio", "/portfolio"),
            Link::new("Knowledge Base", "/knowledge"),
            Link::new("Contact", "/#contact"),
        ],
        resources: vec![
            Link::new(
                "Web Development Guide",
                "/knowledge/category/web-development",
            ),
            Link::new("Security Articles", "/knowledge/category/security"),
            Link::new("Business Strategy", "/knowledge/category/business-strategy"),
            Link::new("All Articles", "/knowledge"),
        ],
        location: "Colombo, Sri Lanka".into(),
        credits: "Crafted with Rust, Leptos, and open-source excellence.".into(),
    }
}
