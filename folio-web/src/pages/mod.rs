mod portfolio;
mod sections;

pub use portfolio::Portfolio;
pub use sections::{
    AboutSection, ContactSection, ExperienceSection, Footer, HeroSection, ProjectsSection,
    SkillsSection,
};
