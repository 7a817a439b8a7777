pub mod resume;

pub use resume::{
    parse_technologies, Education, Experience, PersonalInfo, Project, ResumeData, Skill,
    TemplateId,
};
