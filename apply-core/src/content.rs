//! Nội dung tĩnh của trang: năm bước ứng tuyển và phần giới thiệu.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::ApplyError;

/// Liên kết giữ chỗ cho các bước không có hành động.
pub const PLACEHOLDER_LINK: &str = "#";

/// Tập đóng các bước trên timeline, theo đúng thứ tự hiển thị.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    JoinDiscord,
    StartContributing,
    WriteDraft,
    DiscussWithMentors,
    SubmitFinal,
}

impl StepId {
    pub const ALL: [StepId; 5] = [
        StepId::JoinDiscord,
        StepId::StartContributing,
        StepId::WriteDraft,
        StepId::DiscussWithMentors,
        StepId::SubmitFinal,
    ];

    pub fn title(self) -> &'static str {
        match self {
            StepId::JoinDiscord => "Join us on Discord",
            StepId::StartContributing => "Start Contributing",
            StepId::WriteDraft => "Write a Draft Application",
            StepId::DiscussWithMentors => "Discuss with Mentors",
            StepId::SubmitFinal => "Submit Final Application",
        }
    }

    /// Tra cứu theo tiêu đề hiển thị, `None` nếu tiêu đề lạ.
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.title() == title)
    }

    pub fn content(self) -> StepContent {
        match self {
            StepId::JoinDiscord => StepContent {
                description: "Join the AOSSIE community on Discord and connect with other developers, mentors, and organizers. Our Discord server is a great place to ask questions, share ideas, and get support throughout the Google Summer of Code application process. From proposal writing tips to coding advice, our community is here to help you succeed. Don't go through the process alone, join us on Discord now!",
                button: "Join Discord",
                link: "https://discord.com/invite/6mFZ2S846n",
            },
            StepId::StartContributing => StepContent {
                description: "Contribute to the project and make your mark on open-source development with AOSSIE. By making a Pull Request (PR) to one of our existing projects, you'll have the opportunity to showcase your skills and demonstrate your understanding of the project. This will also give you an opportunity to work with the mentors and get familiar with the project before the official GSoC coding period starts. This is a great way to get started and increase your chances of being selected for the program.",
                button: "Contribute",
                link: "https://gitlab.com/aossie",
            },
            StepId::WriteDraft => StepContent {
                description: "Select an Idea and write a draft application that expands this idea with your own proposals and showcases how you will execute and complete your project. This is your chance to demonstrate your understanding of the project, your skills, and your passion for open-source development. Our mentors will provide feedback and help you refine your proposal, increasing your chances of being selected for the program.",
                button: "Choose an Idea",
                link: "/ideas",
            },
            StepId::DiscussWithMentors => StepContent {
                description: "By having a discussion with our mentors, you'll have the opportunity to ask questions, get feedback, and fine-tune your proposal. This will ensure that your proposal is well-aligned with the project goals and that you fully understand the expectations for the project. Our mentors will provide guidance and support to help you craft the best possible proposal, increasing your chances of being selected for the program.",
                button: "",
                link: PLACEHOLDER_LINK,
            },
            StepId::SubmitFinal => StepContent {
                description: "By submitting your final application for GSoC, you'll be taking the last step in your journey to becoming a part of our community and contributing to projects that are shaping the future of technology. Make sure to submit your application before the deadline and include all the details correctly that are asked by Google. Wait for the selection process to take place and cross your fingers!",
                button: "",
                link: PLACEHOLDER_LINK,
            },
        }
    }

    /// Bước cuối luôn mở và không có nút thu gọn.
    pub fn is_always_expanded(self) -> bool {
        self == StepId::SubmitFinal
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for StepId {
    type Err = ApplyError;

    fn from_str(title: &str) -> Result<Self, Self::Err> {
        Self::from_title(title).ok_or_else(|| ApplyError::UnknownStep(title.to_string()))
    }
}

/// Phần chi tiết của một bước.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StepContent {
    pub description: &'static str,
    pub button: &'static str,
    pub link: &'static str,
}

impl StepContent {
    pub const FALLBACK: StepContent = StepContent {
        description: "",
        button: "",
        link: PLACEHOLDER_LINK,
    };

    /// Tra cứu toàn phần: tiêu đề lạ trả về [`StepContent::FALLBACK`].
    pub fn for_title(title: &str) -> Self {
        title
            .parse::<StepId>()
            .map(StepId::content)
            .unwrap_or(Self::FALLBACK)
    }

    pub fn has_button(&self) -> bool {
        !self.button.is_empty()
    }

    pub fn link_kind(&self) -> LinkKind {
        LinkKind::of(self.link)
    }
}

pub fn description(title: &str) -> &'static str {
    StepContent::for_title(title).description
}

pub fn button(title: &str) -> &'static str {
    StepContent::for_title(title).button
}

pub fn link(title: &str) -> &'static str {
    StepContent::for_title(title).link
}

/// Phân loại liên kết để quyết định cách mở.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Placeholder,
    Internal,
    External,
}

impl LinkKind {
    pub fn of(link: &str) -> Self {
        let link = link.trim();
        if link.is_empty() || link == PLACEHOLDER_LINK {
            LinkKind::Placeholder
        } else if link.starts_with("https://") || link.starts_with("http://") {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }
}

/// Một bước đã ghép tiêu đề và nội dung, dùng để render hoặc xuất sang JS.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TimelineStep {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    pub link: &'static str,
}

impl TimelineStep {
    pub fn content(&self) -> StepContent {
        StepContent {
            description: self.description,
            button: self.button,
            link: self.link,
        }
    }
}

impl From<StepId> for TimelineStep {
    fn from(id: StepId) -> Self {
        let StepContent {
            description,
            button,
            link,
        } = id.content();
        Self {
            id,
            title: id.title(),
            description,
            button,
            link,
        }
    }
}

/// Danh sách năm bước theo thứ tự.
pub fn timeline_steps() -> Vec<TimelineStep> {
    StepId::ALL.into_iter().map(TimelineStep::from).collect()
}

/// Liên kết ngoài ở khung chương trình cuối trang.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ProgramLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Phần chữ cố định bao quanh timeline.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageCopy {
    pub title: &'static str,
    pub meta_description: &'static str,
    pub intro: [&'static str; 2],
    pub logo_alt: &'static str,
    pub program_links: [ProgramLink; 2],
}

pub const PAGE_COPY: PageCopy = PageCopy {
    title: "Application Timeline",
    meta_description: "How to apply for GSOC",
    intro: [
        "Learn how to apply for an opportunity to work on open-source projects and gain real-world experience through Google Summer of Code.",
        "Our application timeline is your step-by-step guide to becoming a part of our open-source community and contributing to projects that are shaping the future of technology. From submitting your proposal to final evaluations, we'll walk you through the process every step of the way. Don't miss this opportunity to be a part of something great and apply now!",
    ],
    logo_alt: "Google Summer of Code",
    program_links: [
        ProgramLink {
            label: "View 2024 Program Announcements",
            href: "https://summerofcode.withgoogle.com/",
        },
        ProgramLink {
            label: "View 2024 Program Timeline",
            href: "https://summerofcode.withgoogle.com/programs/2024",
        },
    ],
};
