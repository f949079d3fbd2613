use crate::entities::profile::ProfileSnapshot;
use crate::errors::ClientError;
use crate::services::profile::ProfileService;
use crate::use_cases::experience::ExperienceReconciler;
use crate::use_cases::resume::ResumeSlot;
use crate::use_cases::skills::SkillsSynchronizer;

/// The profile page's composition root: one service handle per component,
/// all populated from a single snapshot fetch. After distribution each
/// component owns its slice until the next `load`.
pub struct ProfileWorkspace<S>
where
    S: ProfileService,
{
    service: S,
    pub experiences: ExperienceReconciler<S>,
    pub skills: SkillsSynchronizer<S>,
    pub resume: ResumeSlot<S>,
}

impl<S> ProfileWorkspace<S>
where
    S: ProfileService + Clone,
{
    pub fn new(service: S) -> Self {
        ProfileWorkspace {
            experiences: ExperienceReconciler::new(service.clone()),
            skills: SkillsSynchronizer::new(service.clone()),
            resume: ResumeSlot::new(service.clone()),
            service,
        }
    }
}

impl<S> ProfileWorkspace<S>
where
    S: ProfileService,
{
    /// Fetches the full profile and fans it out into the three components.
    /// Safe to call again after any mutation to force a fully
    /// server-confirmed view; reloading the same server state yields the
    /// same local state.
    pub async fn load(&mut self, user_id: i64) -> Result<(), ClientError> {
        let snapshot = self.service.fetch_profile(user_id).await?;
        self.distribute(snapshot);
        Ok(())
    }

    fn distribute(&mut self, snapshot: ProfileSnapshot) {
        tracing::info!(
            experiences = snapshot.experiences.len(),
            skills = snapshot.skills.len(),
            resumes = snapshot.resumes.len(),
            "Profile snapshot loaded"
        );

        self.experiences.restore(snapshot.experiences);
        self.skills.restore(snapshot.skills);
        // Only the most recent resume is ever shown.
        self.resume.restore(snapshot.resumes.into_iter().next());
    }
}
