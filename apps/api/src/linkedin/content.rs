//! LinkedIn profile tips and curated job searches.

use serde::Serialize;

pub const JOB_SEARCH_PREFIX: &str = "https://www.linkedin.com/jobs/search/";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfileTip {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobSearch {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkedInGuidance {
    pub tips: Vec<ProfileTip>,
    pub job_searches: Vec<JobSearch>,
}

const TIPS: &[ProfileTip] = &[
    ProfileTip {
        title: "Optimize Your Headline",
        description: "Use keywords like 'Smart City Analyst', 'Urban Data Specialist', or 'IoT Solutions Expert' to attract recruiters.",
    },
    ProfileTip {
        title: "Showcase Smart City Projects",
        description: "Add projects involving GIS mapping, traffic analysis, sustainability initiatives, or urban planning to your experience.",
    },
    ProfileTip {
        title: "Join Industry Groups",
        description: "Connect with Smart Cities India, Urban Innovation Network, and similar groups to expand your network.",
    },
    ProfileTip {
        title: "Get Certified",
        description: "Add certifications like Google Data Analytics, AWS IoT, or Urban Planning courses to stand out.",
    },
];

const JOB_SEARCHES: &[JobSearch] = &[
    JobSearch {
        title: "Smart City Jobs in India",
        url: "https://www.linkedin.com/jobs/search/?keywords=smart%20city&location=India",
        description: "Find the latest Smart City openings across India",
    },
    JobSearch {
        title: "Urban Planning Roles",
        url: "https://www.linkedin.com/jobs/search/?keywords=urban%20planning%20analyst&location=India",
        description: "Explore urban planning and development positions",
    },
    JobSearch {
        title: "Data Analyst - Cities",
        url: "https://www.linkedin.com/jobs/search/?keywords=city%20data%20analyst&location=India",
        description: "City-focused data analytics opportunities",
    },
    JobSearch {
        title: "IoT & Smart Infrastructure",
        url: "https://www.linkedin.com/jobs/search/?keywords=IoT%20smart%20infrastructure&location=India",
        description: "IoT and smart infrastructure engineering roles",
    },
];

pub fn guidance() -> LinkedInGuidance {
    LinkedInGuidance {
        tips: TIPS.to_vec(),
        job_searches: JOB_SEARCHES.to_vec(),
    }
}
