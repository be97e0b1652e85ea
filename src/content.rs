//! Static portfolio content: tabs, projects, skills, blog posts, and the
//! literal copy shown in each panel. Fixed at compile time, never mutated.

pub const SITE_TITLE: &str = "Sai Bankar - WebXR Developer";

pub const HERO_HEADING: &str = "Welcome to my portfolio!";
pub const HERO_INTRO: &str =
    "I'm Sai Bankar, a WebXR developer with a passion for creating immersive experiences.";

pub const ABOUT_BLURB: &str = "I'm a WebXR developer with a background in computer science \
                               and a passion for creating immersive experiences.";

pub const CONTACT_BLURB: &str = "If you have any questions or would like to collaborate on a \
                                 project, please don't hesitate to reach out.";

/// Remotely hosted placeholder for the About panel profile picture.
pub const PROFILE_IMAGE_URL: &str = "https://via.placeholder.com/200x200";

/// The six content sections the view can display, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    About,
    Work,
    Skills,
    Blog,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::About,
        Tab::Work,
        Tab::Skills,
        Tab::Blog,
        Tab::Contact,
    ];

    /// Lowercase key identifying the tab.
    pub fn key(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::About => "about",
            Tab::Work => "work",
            Tab::Skills => "skills",
            Tab::Blog => "blog",
            Tab::Contact => "contact",
        }
    }

    /// Navigation label: the key with its first character capitalized.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::About => "About",
            Tab::Work => "Work",
            Tab::Skills => "Skills",
            Tab::Blog => "Blog",
            Tab::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub desc: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        name: "Project 1",
        desc: "A brief description of project 1.",
    },
    Project {
        name: "Project 2",
        desc: "A brief description of project 2.",
    },
    Project {
        name: "Project 3",
        desc: "A brief description of project 3.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub desc: &'static str,
}

pub const SKILLS: [Skill; 3] = [
    Skill {
        name: "WebXR",
        desc: "I have experience with WebXR development using A-Frame and Three.js.",
    },
    Skill {
        name: "AR/VR",
        desc: "I have experience with AR/VR development using Unity and Unreal Engine.",
    },
    Skill {
        name: "AI/ML",
        desc: "I have experience with AI/ML development using TensorFlow and PyTorch.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const POSTS: [Post; 3] = [
    Post {
        title: "Post 1",
        desc: "A brief description of post 1.",
    },
    Post {
        title: "Post 2",
        desc: "A brief description of post 2.",
    },
    Post {
        title: "Post 3",
        desc: "A brief description of post 3.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_six_and_ordered() {
        let keys: Vec<&str> = Tab::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys, ["home", "about", "work", "skills", "blog", "contact"]);
    }

    #[test]
    fn default_tab_is_home() {
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn labels_capitalize_the_key() {
        for tab in Tab::ALL {
            let key = tab.key();
            let label = tab.label();
            let mut chars = key.chars();
            let first = chars.next().expect("tab key is non-empty");
            let expected: String = first.to_uppercase().chain(chars).collect();
            assert_eq!(label, expected);
        }
    }

    #[test]
    fn lists_have_three_entries_each() {
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(SKILLS.len(), 3);
        assert_eq!(POSTS.len(), 3);
    }

    #[test]
    fn project_descriptions_derive_from_lowercased_names() {
        for project in PROJECTS {
            let expected = format!("A brief description of {}.", project.name.to_lowercase());
            assert_eq!(project.desc, expected);
        }
    }

    #[test]
    fn skill_names_are_fixed() {
        let names: Vec<&str> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names, ["WebXR", "AR/VR", "AI/ML"]);
    }
}
