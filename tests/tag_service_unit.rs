// tests/tag_service_unit.rs
use std::sync::Arc;

mod support;

use support::{CapturingTagRepo, TagRepoCall};
use tullamore_qa::application::commands::tags::{AddTagCommand, TagCommandService, UpdateTagCommand};
use tullamore_qa::application::queries::tags::TagQueryService;
use tullamore_qa::domain::tag::{Tag, TagName};

fn name(raw: &str) -> TagName {
    TagName::new(raw).unwrap()
}

fn services(repo: Arc<CapturingTagRepo>) -> (TagCommandService, TagQueryService) {
    (
        TagCommandService::new(repo.clone()),
        TagQueryService::new(repo),
    )
}

fn add(name: &str, description: Option<&str>) -> AddTagCommand {
    AddTagCommand {
        name: name.into(),
        description: description.map(str::to_string),
    }
}

#[tokio::test]
async fn adds_tag_with_description() {
    let repo = Arc::new(CapturingTagRepo::new());
    let (commands, _) = services(repo.clone());

    let tag = commands
        .add_tag(add("Java", Some("Description for Java Tag.")))
        .await
        .unwrap();

    assert_eq!(tag.name, "Java");
    assert_eq!(tag.description.as_deref(), Some("Description for Java Tag."));
    assert_eq!(repo.count(&TagRepoCall::Insert("Java".into())), 1);
}

#[tokio::test]
async fn adds_tag_without_description() {
    let repo = Arc::new(CapturingTagRepo::new());
    let (commands, _) = services(repo.clone());

    commands.add_tag(add("Java", None)).await.unwrap();

    assert!(repo.stored("Java").unwrap().description.is_none());
}

#[tokio::test]
async fn adds_several_tags_sharing_a_description() {
    let repo = Arc::new(CapturingTagRepo::new());
    let (commands, _) = services(repo.clone());

    for tag in ["Java", "Numberwang", "Wangernum", "Emma"] {
        commands.add_tag(add(tag, Some("Description"))).await.unwrap();
        assert_eq!(repo.count(&TagRepoCall::Insert(tag.into())), 1);
    }
}

#[tokio::test]
async fn accepts_punctuation_in_names() {
    let repo = Arc::new(CapturingTagRepo::new());
    let (commands, _) = services(repo.clone());

    commands.add_tag(add("C++", None)).await.unwrap();

    assert!(repo.stored("C++").is_some());
}

#[tokio::test]
async fn adding_existing_tag_conflicts_without_writing() {
    let repo = Arc::new(CapturingTagRepo::with_tags([Tag::new(name("Exists"))]));
    let (commands, _) = services(repo.clone());

    let err = commands.add_tag(add("Exists", None)).await.unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(repo.count(&TagRepoCall::Insert("Exists".into())), 0);
}

#[tokio::test]
async fn rejects_names_that_cannot_appear_in_a_path() {
    let repo = Arc::new(CapturingTagRepo::new());
    let (commands, _) = services(repo.clone());

    for bad in ["", "  ", "a/b", "what?", "has space"] {
        assert!(commands.add_tag(add(bad, None)).await.is_err(), "{bad:?}");
    }
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn deletes_by_name_and_by_reference() {
    let by_name = Tag::new(name("DeleteMe"));
    let by_ref = Tag::new(name("DeleteMeToo"));
    let repo = Arc::new(CapturingTagRepo::with_tags([by_name, by_ref.clone()]));
    let (commands, _) = services(repo.clone());

    commands.delete_tag(name("DeleteMe")).await.unwrap();
    commands.delete_tag(&by_ref).await.unwrap();

    assert_eq!(repo.count(&TagRepoCall::Delete("DeleteMe".into())), 1);
    assert_eq!(repo.count(&TagRepoCall::Delete("DeleteMeToo".into())), 1);
    assert!(repo.stored("DeleteMe").is_none());
    assert!(repo.stored("DeleteMeToo").is_none());
}

#[tokio::test]
async fn deleting_missing_tag_is_not_found() {
    let repo = Arc::new(CapturingTagRepo::new());
    let (commands, _) = services(repo.clone());
    let stale = Tag::new(name("DeleteMe"));

    assert!(commands.delete_tag(name("DeleteMe")).await.unwrap_err().is_not_found());
    assert!(commands.delete_tag(&stale).await.unwrap_err().is_not_found());
    assert_eq!(repo.count(&TagRepoCall::Delete("DeleteMe".into())), 0);
}

#[tokio::test]
async fn updates_description_of_existing_tag() {
    let original = Tag::new(name("OriginalTag")).with_description("Original Description");
    let repo = Arc::new(CapturingTagRepo::with_tags([original]));
    let (commands, _) = services(repo.clone());

    let updated = commands
        .update_tag(
            name("OriginalTag"),
            UpdateTagCommand {
                description: Some("New Description".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "OriginalTag");
    assert_eq!(updated.description.as_deref(), Some("New Description"));
    assert_eq!(repo.count(&TagRepoCall::Exists("OriginalTag".into())), 1);
    assert_eq!(repo.count(&TagRepoCall::Update("OriginalTag".into())), 1);
}

#[tokio::test]
async fn updating_missing_tag_is_not_found() {
    let repo = Arc::new(CapturingTagRepo::new());
    let (commands, _) = services(repo.clone());

    let err = commands
        .update_tag(
            name("OriginalTag"),
            UpdateTagCommand {
                description: Some("New Description".into()),
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(repo.count(&TagRepoCall::Update("OriginalTag".into())), 0);
}

#[tokio::test]
async fn gets_single_and_all_tags() {
    let repo = Arc::new(CapturingTagRepo::with_tags([
        Tag::new(name("GetMe1")),
        Tag::new(name("GetMe2")),
    ]));
    let (_, queries) = services(repo.clone());

    let tag = queries.get_tag(name("GetMe1")).await.unwrap();
    assert_eq!(tag.name, "GetMe1");
    assert_eq!(repo.count(&TagRepoCall::FindByName("GetMe1".into())), 1);

    let all = queries.get_all_tags().await.unwrap();
    let names: Vec<_> = all.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["GetMe1", "GetMe2"]);

    assert!(queries.does_tag_exist(name("GetMe2")).await.unwrap());
    assert!(!queries.does_tag_exist(name("Nope")).await.unwrap());
}

#[tokio::test]
async fn getting_missing_tag_is_not_found() {
    let repo = Arc::new(CapturingTagRepo::new());
    let (_, queries) = services(repo);

    assert!(queries.get_tag(name("GetMe")).await.unwrap_err().is_not_found());
}
