use mockall::mock;
use mockall::predicate::eq;

use lessin_client::entities::experience::{Experience, ExperienceForm, ExperiencePayload};
use lessin_client::entities::profile::ProfileSnapshot;
use lessin_client::entities::resume::Resume;
use lessin_client::entities::upload::FileUpload;
use lessin_client::errors::ClientError;
use lessin_client::services::profile::ProfileService;
use lessin_client::use_cases::experience::ExperienceReconciler;

mock! {
    pub ProfileApi {}

    #[async_trait::async_trait]
    impl ProfileService for ProfileApi {
        async fn fetch_profile(&self, user_id: i64) -> Result<ProfileSnapshot, ClientError>;
        async fn create_experience(
            &self,
            user_id: i64,
            payload: &ExperiencePayload,
        ) -> Result<Experience, ClientError>;
        async fn update_experience(
            &self,
            id: i64,
            payload: &ExperiencePayload,
        ) -> Result<Experience, ClientError>;
        async fn delete_experience(&self, id: i64) -> Result<(), ClientError>;
        async fn replace_skills(&self, user_id: i64, skills: &[String]) -> Result<(), ClientError>;
        async fn upload_resume(&self, user_id: i64, upload: FileUpload) -> Result<Resume, ClientError>;
    }
}

fn intern_form() -> ExperienceForm {
    ExperienceForm {
        id: None,
        title: "Intern".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        kind: "Internship".to_string(),
        start_date: "2023-06-01".to_string(),
        end_date: "2023-09-01".to_string(),
        current: false,
        description: "Did X\nDid Y".to_string(),
    }
}

fn confirmed(id: i64, form: &ExperienceForm) -> Experience {
    Experience {
        id,
        title: form.title.clone(),
        company: form.company.clone(),
        location: form.location.clone(),
        kind: form.kind.clone(),
        start_date: form.start_date.clone(),
        end_date: form.resolved_end_date(),
        bullets: form.bullets(),
    }
}

fn seeded(id: i64, title: &str) -> Experience {
    Experience {
        id,
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        kind: "Full-time".to_string(),
        start_date: "2022-01-01".to_string(),
        end_date: "2023-01-01".to_string(),
        bullets: vec!["Shipped things".to_string()],
    }
}

#[tokio::test]
async fn test_create_with_missing_field_issues_no_network_call() {
    let mut api = MockProfileApi::new();
    api.expect_create_experience().times(0);

    let mut reconciler = ExperienceReconciler::new(api);

    let mut form = intern_form();
    form.company.clear();

    let result = reconciler.create(42, &form).await;
    assert!(matches!(result, Err(ClientError::Validation(_))));
    assert!(reconciler.experiences().is_empty());
}

#[tokio::test]
async fn test_create_with_whitespace_only_description_issues_no_network_call() {
    let mut api = MockProfileApi::new();
    api.expect_create_experience().times(0);

    let mut reconciler = ExperienceReconciler::new(api);

    let mut form = intern_form();
    form.description = "  \n   \n".to_string();

    let result = reconciler.create(42, &form).await;
    assert!(matches!(result, Err(ClientError::Validation(_))));
    assert!(reconciler.experiences().is_empty());
}

#[tokio::test]
async fn test_create_appends_confirmed_record() {
    let form = intern_form();
    let expected = confirmed(7, &form);

    let mut api = MockProfileApi::new();
    let returned = expected.clone();
    api.expect_create_experience()
        .withf(|&user_id, payload| {
            user_id == 42 && payload.bullets_json == r#"["Did X","Did Y"]"#
        })
        .times(1)
        .returning(move |_, _| Ok(returned.clone()));

    let mut reconciler = ExperienceReconciler::new(api);
    let created = reconciler.create(42, &form).await.unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(created.bullets, vec!["Did X", "Did Y"]);
    assert_eq!(reconciler.experiences(), std::slice::from_ref(&expected));
}

#[tokio::test]
async fn test_create_failure_leaves_local_state_unchanged() {
    let mut api = MockProfileApi::new();
    api.expect_create_experience()
        .times(1)
        .returning(|_, _| Err(ClientError::Sync("connection reset".to_string())));

    let mut reconciler = ExperienceReconciler::new(api);

    let result = reconciler.create(42, &intern_form()).await;
    assert!(matches!(result, Err(ClientError::Sync(_))));
    assert!(reconciler.experiences().is_empty());
}

#[tokio::test]
async fn test_update_replaces_only_matching_record() {
    let untouched = seeded(1, "Engineer");

    let mut form = ExperienceForm::from(&seeded(2, "Analyst"));
    form.title = "Senior Analyst".to_string();
    let updated = confirmed(2, &form);

    let mut api = MockProfileApi::new();
    let returned = updated.clone();
    api.expect_update_experience()
        .withf(|&id, payload| id == 2 && payload.title == "Senior Analyst")
        .times(1)
        .returning(move |_, _| Ok(returned.clone()));

    let mut reconciler = ExperienceReconciler::new(api);
    reconciler.restore(vec![untouched.clone(), seeded(2, "Analyst")]);

    reconciler.update(2, &form).await.unwrap();

    assert_eq!(reconciler.experiences()[0], untouched);
    assert_eq!(reconciler.experiences()[1], updated);
}

#[tokio::test]
async fn test_update_failure_keeps_previous_record() {
    let before = seeded(2, "Analyst");

    let mut api = MockProfileApi::new();
    api.expect_update_experience()
        .times(1)
        .returning(|_, _| Err(ClientError::Sync("503".to_string())));

    let mut reconciler = ExperienceReconciler::new(api);
    reconciler.restore(vec![before.clone()]);

    let mut form = ExperienceForm::from(&before);
    form.title = "Lead Analyst".to_string();

    let result = reconciler.update(2, &form).await;
    assert!(matches!(result, Err(ClientError::Sync(_))));
    assert_eq!(reconciler.experiences(), std::slice::from_ref(&before));
}

#[tokio::test]
async fn test_delete_removes_exactly_the_target() {
    let mut api = MockProfileApi::new();
    api.expect_delete_experience()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(()));

    let mut reconciler = ExperienceReconciler::new(api);
    reconciler.restore(vec![seeded(1, "Engineer"), seeded(2, "Analyst")]);

    reconciler.delete(1).await.unwrap();

    assert_eq!(reconciler.experiences().len(), 1);
    assert_eq!(reconciler.experiences()[0].id, 2);
}

#[tokio::test]
async fn test_delete_failure_keeps_record_visible() {
    let mut api = MockProfileApi::new();
    api.expect_delete_experience()
        .times(1)
        .returning(|_| Err(ClientError::Sync("timeout".to_string())));

    let mut reconciler = ExperienceReconciler::new(api);
    reconciler.restore(vec![seeded(1, "Engineer")]);

    let result = reconciler.delete(1).await;
    assert!(result.is_err());
    assert_eq!(reconciler.experiences().len(), 1);
}

#[tokio::test]
async fn test_save_creates_when_form_has_no_id() {
    let form = intern_form();
    let created = confirmed(5, &form);

    let mut api = MockProfileApi::new();
    let returned = created.clone();
    api.expect_create_experience()
        .times(1)
        .returning(move |_, _| Ok(returned.clone()));
    api.expect_update_experience().times(0);

    let mut reconciler = ExperienceReconciler::new(api);
    let saved = reconciler.save(42, &form).await.unwrap();
    assert_eq!(saved.id, 5);
}

#[tokio::test]
async fn test_save_updates_when_form_carries_id() {
    let before = seeded(3, "Engineer");
    let form = ExperienceForm::from(&before);

    let mut api = MockProfileApi::new();
    let returned = before.clone();
    api.expect_update_experience()
        .with(eq(3), mockall::predicate::always())
        .times(1)
        .returning(move |_, _| Ok(returned.clone()));
    api.expect_create_experience().times(0);

    let mut reconciler = ExperienceReconciler::new(api);
    reconciler.restore(vec![before]);

    let saved = reconciler.save(42, &form).await.unwrap();
    assert_eq!(saved.id, 3);
}

#[tokio::test]
async fn test_create_then_delete_scenario() {
    let form = intern_form();
    let created = confirmed(99, &form);

    let mut api = MockProfileApi::new();
    let returned = created.clone();
    api.expect_create_experience()
        .times(1)
        .returning(move |_, _| Ok(returned.clone()));
    api.expect_delete_experience()
        .with(eq(99))
        .times(1)
        .returning(|_| Ok(()));

    let mut reconciler = ExperienceReconciler::new(api);

    let record = reconciler.create(42, &form).await.unwrap();
    assert_eq!(record.bullets, vec!["Did X", "Did Y"]);
    assert_eq!(reconciler.experiences().len(), 1);

    reconciler.delete(record.id).await.unwrap();
    assert!(reconciler.experiences().is_empty());
}

#[test]
fn test_current_checkbox_maps_to_present_sentinel() {
    let mut form = intern_form();
    form.current = true;
    form.end_date.clear();

    let payload = form.prepare_for_save();
    assert_eq!(payload.end_date, "Present");
}

#[test]
fn test_present_record_reloads_with_current_set_and_blank_date() {
    let mut record = seeded(4, "Engineer");
    record.end_date = "Present".to_string();

    let form = ExperienceForm::from(&record);
    assert!(form.current);
    assert!(form.end_date.is_empty());
    assert_eq!(form.description, "Shipped things");

    // Saving the untouched form persists the sentinel again.
    assert_eq!(form.prepare_for_save().end_date, "Present");
}
