//! Sample records every store is seeded with at start-up.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::listing::{
    Application, ApplicationStatus, Event, EventType, ExperienceLevel, Job, JobType, Level,
    Mentor, MentorshipProgram, Resource, ResourceType, Speaker,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn pexels(photo: u32, width: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w={width}"
    )
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".into(),
            title: "Senior Software Engineer".into(),
            company: "TechCorp Solutions".into(),
            location: "Bangalore".into(),
            job_type: JobType::FullTime,
            salary: Some("₹25-35 LPA".into()),
            skills: strings(&["React", "Node.js", "TypeScript", "AWS", "System Design"]),
            description: "Looking for an experienced software engineer to lead development of our cloud-based enterprise solutions.".into(),
            posted_date: date(2024, 3, 15),
            logo_url: Some(pexels(3183150, 60)),
            requirements: strings(&[
                "B.Tech/M.Tech in Computer Science or related field",
                "5+ years of experience in full-stack development",
                "Strong knowledge of cloud architecture",
                "Experience with microservices",
            ]),
            responsibilities: strings(&[
                "Lead development of key features",
                "Mentor junior developers",
                "Contribute to system architecture",
                "Code reviews and best practices",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Health insurance",
                "Stock options",
                "Learning budget",
            ]),
            company_description: "Leading enterprise software company with global presence".into(),
            experience_level: ExperienceLevel::Senior,
            industry: strings(&["Technology", "Enterprise Software"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: true,
            views: 450,
            applicants: 25,
            last_updated: date(2024, 3, 15),
            source: "LinkedIn".into(),
        },
        Job {
            id: "2".into(),
            title: "Data Scientist".into(),
            company: "Analytics Hub".into(),
            location: "Hyderabad".into(),
            job_type: JobType::FullTime,
            salary: Some("₹18-25 LPA".into()),
            skills: strings(&["Python", "Machine Learning", "SQL", "Deep Learning", "Statistics"]),
            description: "Join our data science team to build ML models for real-world business problems.".into(),
            posted_date: date(2024, 3, 14),
            logo_url: Some(pexels(936137, 60)),
            requirements: strings(&[
                "Masters in Data Science/Statistics",
                "3+ years experience in ML",
                "Strong programming skills",
                "Experience with deep learning frameworks",
            ]),
            responsibilities: strings(&[
                "Develop ML models",
                "Data analysis and visualization",
                "Model deployment and monitoring",
                "Stakeholder communication",
            ]),
            benefits: strings(&[
                "Flexible work hours",
                "Health coverage",
                "Remote work options",
                "Conference budget",
            ]),
            company_description: "AI-driven analytics company working with Fortune 500 clients".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Data Science", "AI/ML"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 320,
            applicants: 18,
            last_updated: date(2024, 3, 14),
            source: "Indeed".into(),
        },
        Job {
            id: "3".into(),
            title: "UI/UX Designer".into(),
            company: "Creative Digital".into(),
            location: "Remote".into(),
            job_type: JobType::Remote,
            salary: Some("₹12-18 LPA".into()),
            skills: strings(&[
                "Figma",
                "User Research",
                "Design Systems",
                "Prototyping",
                "Adobe XD",
            ]),
            description: "Create beautiful and intuitive user interfaces for our digital products.".into(),
            posted_date: date(2024, 3, 13),
            logo_url: Some(pexels(3153198, 60)),
            requirements: strings(&[
                "Bachelors in Design/HCI",
                "3+ years of UI/UX experience",
                "Strong portfolio",
                "Experience with design systems",
            ]),
            responsibilities: strings(&[
                "User interface design",
                "Usability testing",
                "Design system maintenance",
                "Team collaboration",
            ]),
            benefits: strings(&[
                "Remote work",
                "Health insurance",
                "Design tool subscriptions",
                "Learning allowance",
            ]),
            company_description: "Digital design agency creating exceptional user experiences".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Design", "Technology"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: true,
            views: 280,
            applicants: 22,
            last_updated: date(2024, 3, 13),
            source: "Behance".into(),
        },
        Job {
            id: "4".into(),
            title: "Product Marketing Manager".into(),
            company: "MarketPro".into(),
            location: "Mumbai".into(),
            job_type: JobType::FullTime,
            salary: Some("₹20-28 LPA".into()),
            skills: strings(&[
                "Digital Marketing",
                "Content Strategy",
                "Analytics",
                "Product Launch",
                "SEO",
            ]),
            description: "Lead product marketing initiatives for our B2B SaaS platform.".into(),
            posted_date: date(2024, 3, 12),
            logo_url: Some(pexels(3184291, 60)),
            requirements: strings(&[
                "MBA in Marketing",
                "5+ years in product marketing",
                "B2B SaaS experience",
                "Strong analytical skills",
            ]),
            responsibilities: strings(&[
                "Product launch strategy",
                "Market research",
                "Content development",
                "Performance tracking",
            ]),
            benefits: strings(&[
                "Performance bonus",
                "Health coverage",
                "Flexible hours",
                "Training budget",
            ]),
            company_description: "Leading B2B SaaS platform for marketing automation".into(),
            experience_level: ExperienceLevel::Senior,
            industry: strings(&["Marketing", "SaaS"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 245,
            applicants: 15,
            last_updated: date(2024, 3, 12),
            source: "Company Website".into(),
        },
        Job {
            id: "5".into(),
            title: "Frontend Developer".into(),
            company: "WebTech Solutions".into(),
            location: "Pune".into(),
            job_type: JobType::FullTime,
            salary: Some("₹8-12 LPA".into()),
            skills: strings(&["React", "JavaScript", "HTML/CSS", "Redux", "Testing"]),
            description: "Join our frontend team to build responsive web applications.".into(),
            posted_date: date(2024, 3, 11),
            logo_url: Some(pexels(3182812, 60)),
            requirements: strings(&[
                "Bachelor's degree in CS/IT",
                "1-3 years experience",
                "Strong JavaScript skills",
                "Testing experience",
            ]),
            responsibilities: strings(&[
                "Frontend development",
                "Component creation",
                "Performance optimization",
                "Bug fixing",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Flexible timing",
                "Learning opportunities",
                "Team events",
            ]),
            company_description: "Web development company specializing in modern applications".into(),
            experience_level: ExperienceLevel::Entry,
            industry: strings(&["Technology", "Web Development"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 380,
            applicants: 45,
            last_updated: date(2024, 3, 11),
            source: "LinkedIn".into(),
        },
        Job {
            id: "6".into(),
            title: "HR Business Partner".into(),
            company: "People First".into(),
            location: "Delhi".into(),
            job_type: JobType::FullTime,
            salary: Some("₹15-20 LPA".into()),
            skills: strings(&[
                "HR Management",
                "Employee Relations",
                "Talent Development",
                "Organization Development",
            ]),
            description: "Strategic HR role partnering with business units to drive organizational success.".into(),
            posted_date: date(2024, 3, 10),
            logo_url: Some(pexels(3184465, 60)),
            requirements: strings(&[
                "MBA in HR",
                "5+ years HR experience",
                "Strong communication skills",
                "Change management experience",
            ]),
            responsibilities: strings(&[
                "HR strategy development",
                "Employee engagement",
                "Performance management",
                "Talent development",
            ]),
            benefits: strings(&[
                "Medical insurance",
                "Professional development",
                "Work-life balance",
                "Performance bonus",
            ]),
            company_description: "HR consulting firm focused on organizational development".into(),
            experience_level: ExperienceLevel::Senior,
            industry: strings(&["Human Resources", "Consulting"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 190,
            applicants: 12,
            last_updated: date(2024, 3, 10),
            source: "Naukri".into(),
        },
        Job {
            id: "7".into(),
            title: "DevOps Engineer".into(),
            company: "CloudTech".into(),
            location: "Bangalore".into(),
            job_type: JobType::FullTime,
            salary: Some("₹18-25 LPA".into()),
            skills: strings(&["AWS", "Docker", "Kubernetes", "CI/CD", "Infrastructure as Code"]),
            description: "Build and maintain our cloud infrastructure and deployment pipelines.".into(),
            posted_date: date(2024, 3, 9),
            logo_url: Some(pexels(3183183, 60)),
            requirements: strings(&[
                "B.Tech in CS/IT",
                "3+ years DevOps experience",
                "Strong cloud platform knowledge",
                "Automation experience",
            ]),
            responsibilities: strings(&[
                "Infrastructure management",
                "Pipeline automation",
                "Security implementation",
                "Performance optimization",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Health benefits",
                "Remote work options",
                "Learning allowance",
            ]),
            company_description: "Cloud solutions provider for enterprise clients".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Technology", "Cloud Computing"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 275,
            applicants: 20,
            last_updated: date(2024, 3, 9),
            source: "LinkedIn".into(),
        },
        Job {
            id: "8".into(),
            title: "Content Writer".into(),
            company: "Digital Content Co".into(),
            location: "Remote".into(),
            job_type: JobType::PartTime,
            salary: Some("₹6-8 LPA".into()),
            skills: strings(&["Content Writing", "SEO", "Research", "Editing", "Social Media"]),
            description: "Create engaging content for our digital platforms and clients.".into(),
            posted_date: date(2024, 3, 8),
            logo_url: Some(pexels(3184292, 60)),
            requirements: strings(&[
                "Bachelor's in English/Journalism",
                "2+ years writing experience",
                "SEO knowledge",
                "Portfolio of published work",
            ]),
            responsibilities: strings(&[
                "Content creation",
                "SEO optimization",
                "Research and fact-checking",
                "Editorial calendar management",
            ]),
            benefits: strings(&[
                "Flexible schedule",
                "Remote work",
                "Performance bonuses",
                "Writing tools access",
            ]),
            company_description: "Digital content agency serving global clients".into(),
            experience_level: ExperienceLevel::Entry,
            industry: strings(&["Content", "Digital Media"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 180,
            applicants: 25,
            last_updated: date(2024, 3, 8),
            source: "Indeed".into(),
        },
        Job {
            id: "9".into(),
            title: "Financial Analyst".into(),
            company: "FinCorp".into(),
            location: "Mumbai".into(),
            job_type: JobType::FullTime,
            salary: Some("₹12-15 LPA".into()),
            skills: strings(&[
                "Financial Modeling",
                "Excel",
                "Data Analysis",
                "Reporting",
                "Forecasting",
            ]),
            description: "Analyze financial data and create reports for business decision-making.".into(),
            posted_date: date(2024, 3, 7),
            logo_url: Some(pexels(3184465, 60)),
            requirements: strings(&[
                "MBA Finance",
                "2-4 years experience",
                "Advanced Excel skills",
                "Financial modeling expertise",
            ]),
            responsibilities: strings(&[
                "Financial analysis",
                "Report preparation",
                "Forecasting",
                "Budget planning",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Performance bonus",
                "Professional development",
                "Gym membership",
            ]),
            company_description: "Leading financial services firm".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Finance", "Banking"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 220,
            applicants: 18,
            last_updated: date(2024, 3, 7),
            source: "Company Website".into(),
        },
        Job {
            id: "10".into(),
            title: "Project Manager".into(),
            company: "ProjectPro".into(),
            location: "Bangalore".into(),
            job_type: JobType::FullTime,
            salary: Some("₹20-28 LPA".into()),
            skills: strings(&[
                "Project Management",
                "Agile",
                "Stakeholder Management",
                "Risk Management",
                "JIRA",
            ]),
            description: "Lead technology projects from inception to delivery.".into(),
            posted_date: date(2024, 3, 6),
            logo_url: Some(pexels(3184339, 60)),
            requirements: strings(&[
                "PMP Certification",
                "5+ years project management",
                "Agile certification",
                "Strong leadership skills",
            ]),
            responsibilities: strings(&[
                "Project planning",
                "Team leadership",
                "Risk management",
                "Stakeholder communication",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Health coverage",
                "Stock options",
                "Training budget",
            ]),
            company_description: "Project management consulting firm".into(),
            experience_level: ExperienceLevel::Senior,
            industry: strings(&["Technology", "Consulting"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 290,
            applicants: 22,
            last_updated: date(2024, 3, 6),
            source: "LinkedIn".into(),
        },
        Job {
            id: "11".into(),
            title: "Sales Executive".into(),
            company: "SalesPro".into(),
            location: "Delhi".into(),
            job_type: JobType::FullTime,
            salary: Some("₹8-12 LPA + Commission".into()),
            skills: strings(&[
                "B2B Sales",
                "Negotiation",
                "CRM",
                "Lead Generation",
                "Relationship Building",
            ]),
            description: "Drive B2B sales for our enterprise software solutions.".into(),
            posted_date: date(2024, 3, 5),
            logo_url: Some(pexels(3184405, 60)),
            requirements: strings(&[
                "Bachelor's degree",
                "2+ years B2B sales",
                "CRM experience",
                "Strong communication skills",
            ]),
            responsibilities: strings(&[
                "Lead generation",
                "Sales presentations",
                "Contract negotiation",
                "Client relationship management",
            ]),
            benefits: strings(&[
                "Base + Commission",
                "Health insurance",
                "Sales training",
                "Travel allowance",
            ]),
            company_description: "Enterprise software sales organization".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Sales", "Technology"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 210,
            applicants: 28,
            last_updated: date(2024, 3, 5),
            source: "Indeed".into(),
        },
        Job {
            id: "12".into(),
            title: "Quality Assurance Engineer".into(),
            company: "QualityTech".into(),
            location: "Pune".into(),
            job_type: JobType::FullTime,
            salary: Some("₹10-15 LPA".into()),
            skills: strings(&[
                "Manual Testing",
                "Automation Testing",
                "Selenium",
                "API Testing",
                "Test Planning",
            ]),
            description: "Ensure software quality through comprehensive testing strategies.".into(),
            posted_date: date(2024, 3, 4),
            logo_url: Some(pexels(3184291, 60)),
            requirements: strings(&[
                "B.Tech in CS/IT",
                "3+ years QA experience",
                "Automation testing expertise",
                "ISTQB certification",
            ]),
            responsibilities: strings(&[
                "Test planning",
                "Automation framework development",
                "Bug tracking",
                "Quality reporting",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Flexible hours",
                "Certification support",
                "Team events",
            ]),
            company_description: "Software quality assurance company".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Technology", "Quality Assurance"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 185,
            applicants: 15,
            last_updated: date(2024, 3, 4),
            source: "Naukri".into(),
        },
        Job {
            id: "13".into(),
            title: "Business Analyst".into(),
            company: "BizSolutions".into(),
            location: "Hyderabad".into(),
            job_type: JobType::FullTime,
            salary: Some("₹12-18 LPA".into()),
            skills: strings(&[
                "Business Analysis",
                "Requirements Gathering",
                "Process Modeling",
                "Agile",
                "Documentation",
            ]),
            description: "Bridge the gap between business needs and technical solutions.".into(),
            posted_date: date(2024, 3, 3),
            logo_url: Some(pexels(3184465, 60)),
            requirements: strings(&[
                "MBA/B.Tech",
                "3+ years BA experience",
                "Strong analytical skills",
                "Process modeling expertise",
            ]),
            responsibilities: strings(&[
                "Requirements analysis",
                "Process improvement",
                "Stakeholder management",
                "Solution design",
            ]),
            benefits: strings(&[
                "Competitive salary",
                "Health benefits",
                "Professional development",
                "Work-life balance",
            ]),
            company_description: "Business consulting and solutions firm".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Consulting", "Technology"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 230,
            applicants: 20,
            last_updated: date(2024, 3, 3),
            source: "LinkedIn".into(),
        },
        Job {
            id: "14".into(),
            title: "Digital Marketing Specialist".into(),
            company: "DigitalPro".into(),
            location: "Remote".into(),
            job_type: JobType::Contract,
            salary: Some("₹8-12 LPA".into()),
            skills: strings(&[
                "SEO",
                "SEM",
                "Social Media Marketing",
                "Content Marketing",
                "Analytics",
            ]),
            description: "Drive digital marketing initiatives across multiple channels.".into(),
            posted_date: date(2024, 3, 2),
            logo_url: Some(pexels(3184292, 60)),
            requirements: strings(&[
                "Bachelor's in Marketing",
                "2+ years digital marketing",
                "Google certifications",
                "Analytics experience",
            ]),
            responsibilities: strings(&[
                "Campaign management",
                "SEO optimization",
                "Social media strategy",
                "Performance analysis",
            ]),
            benefits: strings(&[
                "Remote work",
                "Flexible hours",
                "Performance bonus",
                "Tool subscriptions",
            ]),
            company_description: "Digital marketing agency".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Marketing", "Digital Media"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 175,
            applicants: 23,
            last_updated: date(2024, 3, 2),
            source: "Indeed".into(),
        },
        Job {
            id: "15".into(),
            title: "System Administrator".into(),
            company: "TechOps".into(),
            location: "Bangalore".into(),
            job_type: JobType::FullTime,
            salary: Some("₹10-15 LPA".into()),
            skills: strings(&["Linux", "Windows Server", "Networking", "Security", "Scripting"]),
            description: "Manage and maintain our IT infrastructure and systems.".into(),
            posted_date: date(2024, 3, 1),
            logo_url: Some(pexels(3183150, 60)),
            requirements: strings(&[
                "B.Tech in IT/CS",
                "3+ years sysadmin experience",
                "Linux certification",
                "Security knowledge",
            ]),
            responsibilities: strings(&[
                "System administration",
                "Security management",
                "User support",
                "Infrastructure maintenance",
            ]),
            benefits: strings(&[
                "Health insurance",
                "Shift allowance",
                "Certification support",
                "Gym membership",
            ]),
            company_description: "IT infrastructure management company".into(),
            experience_level: ExperienceLevel::Mid,
            industry: strings(&["Technology", "IT Infrastructure"]),
            application_deadline: None,
            is_bookmarked: false,
            is_new: false,
            views: 195,
            applicants: 16,
            last_updated: date(2024, 3, 1),
            source: "Naukri".into(),
        },    ]
}

pub fn events() -> Vec<Event> {
    let speaker = |name: &str, role: &str, company: &str, photo: u32| Speaker {
        name: name.into(),
        role: role.into(),
        company: company.into(),
        image_url: Some(pexels(photo, 60)),
    };

    vec![
        Event {
            id: "1".into(),
            title: "Women in Leadership Summit".into(),
            description: "Join us for this inspirational summit featuring women leaders from various industries sharing their journeys, challenges, and strategies for success.".into(),
            date: date(2026, 11, 20),
            time: "10:00 AM - 5:00 PM".into(),
            event_type: EventType::Conference,
            location: "Virtual".into(),
            image_url: pexels(2041627, 600),
            registration_url: Some("#register-summit".into()),
            is_featured: true,
            speakers: vec![
                speaker("Priya Sharma", "CEO", "TechInnovate", 3772509),
                speaker("Sarah Johnson", "CTO", "Global Systems", 1181686),
            ],
        },
        Event {
            id: "2".into(),
            title: "Resume Building Workshop".into(),
            description: "Learn how to craft a compelling resume that highlights your skills and experiences effectively. This workshop will provide practical tips and personalized feedback.".into(),
            date: date(2026, 11, 15),
            time: "2:00 PM - 4:00 PM".into(),
            event_type: EventType::Workshop,
            location: "Virtual".into(),
            image_url: pexels(3184465, 600),
            registration_url: Some("#register-workshop".into()),
            is_featured: false,
            speakers: vec![speaker(
                "Meera Patel",
                "Career Coach",
                "JobsForHer Foundation",
                1587009,
            )],
        },
        Event {
            id: "3".into(),
            title: "Tech Career Paths Webinar".into(),
            description: "Explore various career paths in the technology industry. This webinar will cover roles in development, product management, data science, and more.".into(),
            date: date(2026, 11, 28),
            time: "11:00 AM - 12:30 PM".into(),
            event_type: EventType::Webinar,
            location: "Virtual".into(),
            image_url: pexels(3184292, 600),
            registration_url: Some("#register-webinar".into()),
            is_featured: false,
            speakers: vec![speaker(
                "Divya Khosla",
                "Director of Engineering",
                "SoftTech Solutions",
                3779760,
            )],
        },
        Event {
            id: "4".into(),
            title: "Networking Mixer: Women in Finance".into(),
            description: "Connect with professionals in the finance industry, share experiences, and build your network in this informal mixer event.".into(),
            date: date(2026, 12, 5),
            time: "6:00 PM - 8:00 PM".into(),
            event_type: EventType::Networking,
            location: "Bangalore".into(),
            image_url: pexels(1181622, 600),
            registration_url: Some("#register-mixer".into()),
            is_featured: true,
            speakers: Vec::new(),
        },
        Event {
            id: "5".into(),
            title: "Interview Preparation Masterclass".into(),
            description: "Master the art of interviewing with this comprehensive masterclass. Learn techniques to showcase your strengths and handle challenging questions with confidence.".into(),
            date: date(2026, 12, 10),
            time: "3:00 PM - 5:00 PM".into(),
            event_type: EventType::Workshop,
            location: "Virtual".into(),
            image_url: pexels(3184405, 600),
            registration_url: Some("#register-masterclass".into()),
            is_featured: false,
            speakers: Vec::new(),
        },
        Event {
            id: "6".into(),
            title: "Women Entrepreneurs Forum".into(),
            description: "A platform for women entrepreneurs to share insights, discuss challenges, and explore collaboration opportunities. Join us for inspiring talks and productive discussions.".into(),
            date: date(2027, 1, 18),
            time: "10:00 AM - 3:00 PM".into(),
            event_type: EventType::Conference,
            location: "Mumbai".into(),
            image_url: pexels(3184418, 600),
            registration_url: Some("#register-forum".into()),
            is_featured: true,
            speakers: Vec::new(),
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".into(),
            title: "Building a Successful Career in Tech as a Woman".into(),
            resource_type: ResourceType::Article,
            category: "Career Development".into(),
            description: "Insights and strategies for navigating the tech industry and overcoming common challenges faced by women.".into(),
            image_url: pexels(3184405, 350),
            author: Some("Dr. Priya Sharma".into()),
            date: date(2023, 6, 10),
            read_time: Some("8 min".into()),
            duration: None,
            level: None,
            tags: strings(&["Technology", "Career Growth", "Women in Tech"]),
            url: None,
            is_bookmarked: false,
            downloads: None,
            views: Some(1250),
            rating: Some(4.8),
        },
        Resource {
            id: "2".into(),
            title: "Mastering the Behavioural Interview".into(),
            resource_type: ResourceType::Video,
            category: "Interview Preparation".into(),
            description: "A walkthrough of the STAR method with worked answers to the questions recruiters ask most often.".into(),
            image_url: pexels(3184292, 350),
            author: Some("Meera Patel".into()),
            date: date(2023, 5, 22),
            read_time: None,
            duration: Some("24 min".into()),
            level: Some(Level::Beginner),
            tags: strings(&["Interviews", "Communication"]),
            url: None,
            is_bookmarked: false,
            downloads: None,
            views: Some(860),
            rating: Some(4.6),
        },
        Resource {
            id: "3".into(),
            title: "Professional Resume Template".into(),
            resource_type: ResourceType::Template,
            category: "Resume Writing".into(),
            description: "An ATS-friendly resume layout with guidance notes for each section.".into(),
            image_url: pexels(3184465, 350),
            author: None,
            date: date(2023, 4, 2),
            read_time: None,
            duration: None,
            level: Some(Level::AllLevels),
            tags: strings(&["Resume", "Job Search"]),
            url: None,
            is_bookmarked: false,
            downloads: Some(3400),
            views: None,
            rating: Some(4.9),
        },
        Resource {
            id: "4".into(),
            title: "Data Analysis Foundations".into(),
            resource_type: ResourceType::Course,
            category: "Skill Development".into(),
            description: "Six self-paced modules covering spreadsheets, SQL and basic statistics for career switchers.".into(),
            image_url: pexels(936137, 350),
            author: Some("Sonia Mehta".into()),
            date: date(2023, 3, 15),
            read_time: None,
            duration: Some("6 weeks".into()),
            level: Some(Level::Intermediate),
            tags: strings(&["Data Analysis", "Technology", "Career Growth"]),
            url: None,
            is_bookmarked: false,
            downloads: None,
            views: Some(2100),
            rating: Some(4.7),
        },
        Resource {
            id: "5".into(),
            title: "Negotiating Your Offer".into(),
            resource_type: ResourceType::Article,
            category: "Career Development".into(),
            description: "How to research salary bands and respond to an offer with confidence.".into(),
            image_url: pexels(3184339, 350),
            author: Some("Kavita Desai".into()),
            date: date(2023, 2, 8),
            read_time: Some("6 min".into()),
            duration: None,
            level: Some(Level::Advanced),
            tags: strings(&["Negotiation", "Job Search"]),
            url: None,
            is_bookmarked: false,
            downloads: None,
            views: Some(740),
            rating: Some(4.5),
        },
    ]
}

pub fn mentors() -> Vec<Mentor> {
    let mentor = |id: &str,
                  name: &str,
                  role: &str,
                  company: &str,
                  experience: u32,
                  skills: &[&str],
                  bio: &str,
                  photo: u32| Mentor {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        company: company.into(),
        experience,
        skills: strings(skills),
        bio: bio.into(),
        image_url: pexels(photo, 350),
    };

    vec![
        mentor(
            "1",
            "Dr. Priya Sharma",
            "Chief Technology Officer",
            "TechInnovate Solutions",
            15,
            &["Leadership", "Technology Strategy", "Product Development", "Team Building"],
            "Dr. Sharma has over 15 years of experience in technology leadership roles. She specializes in helping women navigate the tech industry and build successful careers.",
            3772511,
        ),
        mentor(
            "2",
            "Ananya Patel",
            "Senior Product Manager",
            "GlobalTech",
            8,
            &["Product Strategy", "User Research", "Agile", "Market Analysis"],
            "Ananya has helped numerous women transition into product management roles. She provides practical guidance on building user-centric products and career advancement.",
            1181686,
        ),
        mentor(
            "3",
            "Neha Reddy",
            "VP of Engineering",
            "InnovateTech",
            12,
            &["Engineering Leadership", "Software Architecture", "Scaling Teams", "Career Development"],
            "Neha specializes in helping women engineers advance in their careers. She provides guidance on technical leadership and navigating career challenges.",
            774909,
        ),
        mentor(
            "4",
            "Sonia Mehta",
            "Data Science Director",
            "Analytics Nexus",
            10,
            &["Data Science", "Machine Learning", "Team Leadership", "Career Transitions"],
            "Sonia helps women enter and advance in data science careers. She offers guidance on skill development and overcoming challenges in the analytics field.",
            1181691,
        ),
        mentor(
            "5",
            "Maya Krishnan",
            "Marketing Executive",
            "Global Brands Inc.",
            14,
            &["Marketing Strategy", "Brand Management", "Leadership", "Career Planning"],
            "Maya specializes in helping women build successful marketing careers. She offers guidance on personal branding and leadership development.",
            1239291,
        ),
        mentor(
            "6",
            "Kavita Desai",
            "HR Director",
            "Future Workforce Solutions",
            12,
            &["Talent Management", "Leadership Development", "Career Coaching", "Workplace Inclusion"],
            "Kavita is passionate about helping women navigate workplace challenges and advance in their careers through effective HR practices and career development.",
            3769021,
        ),
    ]
}

pub fn mentorship_programs() -> Vec<MentorshipProgram> {
    vec![
        MentorshipProgram {
            id: "1".into(),
            title: "Leadership Development Program".into(),
            description: "A 3-month structured program focused on developing leadership skills for women in mid-career stages.".into(),
            duration: "3 months".into(),
            format: "1:1 Mentoring + Group Sessions".into(),
            requirements: "Minimum 5 years of work experience".into(),
            image_url: pexels(3184360, 600),
        },
        MentorshipProgram {
            id: "2".into(),
            title: "Career Transition Support".into(),
            description: "Designed for women looking to change industries or roles, this program provides guidance and support through the transition.".into(),
            duration: "4 months".into(),
            format: "Weekly 1:1 Sessions".into(),
            requirements: "Currently employed professionals".into(),
            image_url: pexels(3184291, 600),
        },
        MentorshipProgram {
            id: "3".into(),
            title: "Return to Work Program".into(),
            description: "Supporting women who are returning to the workforce after a career break with skill updates and confidence building.".into(),
            duration: "6 months".into(),
            format: "Bi-weekly Sessions + Workshops".into(),
            requirements: "Previous work experience of at least 2 years".into(),
            image_url: pexels(3184338, 600),
        },
    ]
}

pub fn applications() -> Vec<Application> {
    vec![
        Application {
            id: "1".into(),
            job_id: "job1".into(),
            job_title: "Senior Product Manager".into(),
            company: "TechCorp Solutions".into(),
            status: ApplicationStatus::Interview,
            applied_date: timestamp(2023, 6, 1),
            last_updated: timestamp(2023, 6, 10),
            notes: "Had initial screening call. Technical interview scheduled.".into(),
            next_steps: Some("Prepare for technical interview".into()),
            interview_date: Some("2023-06-15T10:00".into()),
            location: "Bangalore".into(),
            salary: Some("18-25 LPA".into()),
            job_type: "Full-time".into(),
            source: "LinkedIn".into(),
            contact_person: Some("Priya Sharma".into()),
            contact_email: Some("priya.s@techcorp.com".into()),
            follow_up_date: Some(date(2023, 6, 16)),
        },
        Application {
            id: "2".into(),
            job_id: "job2".into(),
            job_title: "UX Designer".into(),
            company: "Creative Innovations".into(),
            status: ApplicationStatus::Reviewing,
            applied_date: timestamp(2023, 6, 5),
            last_updated: timestamp(2023, 6, 8),
            notes: "Application under review. Portfolio well-received.".into(),
            next_steps: None,
            interview_date: None,
            location: "Remote".into(),
            salary: None,
            job_type: "Full-time".into(),
            source: "Company Website".into(),
            contact_person: Some("Rahul Mehta".into()),
            contact_email: None,
            follow_up_date: None,
        },
        Application {
            id: "3".into(),
            job_id: "job3".into(),
            job_title: "Data Scientist".into(),
            company: "Analytics Nexus".into(),
            status: ApplicationStatus::Pending,
            applied_date: timestamp(2023, 6, 8),
            last_updated: timestamp(2023, 6, 8),
            notes: "Submitted application with portfolio of projects".into(),
            next_steps: None,
            interview_date: None,
            location: "Hyderabad".into(),
            salary: Some("15-20 LPA".into()),
            job_type: "Full-time".into(),
            source: "JobsForHer".into(),
            contact_person: None,
            contact_email: None,
            follow_up_date: None,
        },
        Application {
            id: "4".into(),
            job_id: "job4".into(),
            job_title: "Frontend Developer".into(),
            company: "WebTech Solutions".into(),
            status: ApplicationStatus::Offer,
            applied_date: timestamp(2023, 5, 15),
            last_updated: timestamp(2023, 6, 7),
            notes: "Received offer letter. Negotiating terms.".into(),
            next_steps: Some("Review and respond to offer".into()),
            interview_date: None,
            location: "Pune".into(),
            salary: Some("12-15 LPA".into()),
            job_type: "Full-time".into(),
            source: "Referral".into(),
            contact_person: Some("Amit Shah".into()),
            contact_email: Some("amit.s@webtech.com".into()),
            follow_up_date: None,
        },
        Application {
            id: "5".into(),
            job_id: "job5".into(),
            job_title: "Marketing Manager".into(),
            company: "Global Brands".into(),
            status: ApplicationStatus::Rejected,
            applied_date: timestamp(2023, 5, 20),
            last_updated: timestamp(2023, 6, 5),
            notes: "Position filled internally. Keep in touch for future opportunities.".into(),
            next_steps: None,
            interview_date: None,
            location: "Mumbai".into(),
            salary: None,
            job_type: "Full-time".into(),
            source: "Company Website".into(),
            contact_person: None,
            contact_email: None,
            follow_up_date: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_per_collection() {
        fn unique<'a>(ids: impl Iterator<Item = &'a str>) -> bool {
            let mut seen = HashSet::new();
            ids.into_iter().all(|id| seen.insert(id))
        }

        assert!(unique(jobs().iter().map(|j| j.id.as_str())));
        assert!(unique(events().iter().map(|e| e.id.as_str())));
        assert!(unique(resources().iter().map(|r| r.id.as_str())));
        assert!(unique(mentors().iter().map(|m| m.id.as_str())));
        assert!(unique(applications().iter().map(|a| a.id.as_str())));
    }

    #[test]
    fn pexels_builds_sized_url() {
        assert_eq!(
            pexels(774909, 150),
            "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150"
        );
    }
}
