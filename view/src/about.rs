use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

/// A site that inspired the project, with an optional author credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inspiration {
    pub link: Link,
    pub credit: Option<Link>,
}

pub const INTRO: &str = "index.community is a tool to visualize networks and communities on the \
     fediverse. It works by crawling every instance it can find and aggregating statistics on \
     communication between these.";

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Why can't I see details about my instance?",
        answer: "index.community only supports servers using the Mastodon API, the Misskey API, \
                 the GNU Social API, or Nodeinfo. Instances with 10 or fewer users won't be \
                 crawled -- it's a tool for understanding communities, not individuals.",
    },
    FaqEntry {
        question: "When is $OTHER_FEDIVERSE_SERVER going to be added?",
        answer: "We are in the early forking-out phase, and don't provide any support yet. \
                 Check back later.",
    },
    FaqEntry {
        question: "How do I add my personal instance?",
        answer: "Click on the Administration link in the top right to opt-in.",
    },
    FaqEntry {
        question: "How do you calculate the strength of relationships between instances?",
        answer: "index.community looks at public statuses from within the last month on the \
                 public timeline of each instance. It calculates at the ratio of mentions of an \
                 instance / total statuses. It uses a ratio rather than an absolute number of \
                 mentions to reflect that smaller instances can play a large role in a community.",
    },
];

pub const INTRO_LINKS: &[Link] = &[
    Link {
        label: "fediverse",
        url: "https://en.wikipedia.org/wiki/Fediverse",
    },
    Link {
        label: "Mastodon",
        url: "https://social.inex.rocks/@indexCommunity",
    },
    Link {
        label: "Tao Bojlén",
        url: "https://www.btao.org",
    },
];

pub const MAINTAINER_LINKS: &[Link] = &[
    Link {
        label: "InnerEq.org",
        url: "https://innereq.org",
    },
    Link {
        label: "patron",
        url: "https://www.patreon.com/inexcode",
    },
    Link {
        label: "crypto",
        url: "https://inex.rocks/#donate",
    },
];

pub const SPONSORS: &[Link] = &[Link {
    label: "NLnet",
    url: "https://nlnet.nl/project/fediverse_space/",
}];

pub const INSPIRATION: &[Inspiration] = &[
    Inspiration {
        link: Link {
            label: "the-federation.info",
            url: "https://the-federation.info/",
        },
        credit: None,
    },
    Inspiration {
        link: Link {
            label: "fediverse.network",
            url: "http://fediverse.network/",
        },
        credit: None,
    },
    Inspiration {
        link: Link {
            label: "Mastodon hashtag network",
            url: "https://lucahammer.at/vis/fediverse/2018-08-30-mastoverse_hashtags/",
        },
        credit: Some(Link {
            label: "@Luca@vis.social",
            url: "https://vis.social/web/statuses/100634284168959187",
        }),
    },
];

/// Every outbound link on the about page.
pub fn all_links() -> impl Iterator<Item = &'static Link> {
    INTRO_LINKS
        .iter()
        .chain(MAINTAINER_LINKS)
        .chain(SPONSORS)
        .chain(
            INSPIRATION
                .iter()
                .flat_map(|entry| std::iter::once(&entry.link).chain(entry.credit.as_ref())),
        )
        .chain(std::iter::once(&SOURCE_CODE))
}

pub const SOURCE_CODE: Link = Link {
    label: "Gitea",
    url: "https://inex.dev/inex/index.community",
};

pub fn find_answer(question: &str) -> Option<&'static str> {
    FAQ.iter()
        .find(|entry| entry.question.eq_ignore_ascii_case(question.trim()))
        .map(|entry| entry.answer)
}
