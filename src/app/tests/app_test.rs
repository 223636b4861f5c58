use crate::app::core::{init, Effect, Inference, Msg};
use crate::app::tests::fixture::Fixture;
use crate::device_input::interface::UserAction;
use crate::image_source::impl_fake::ImageSourceFake;
use std::path::PathBuf;

#[test]
fn test_sample_then_run_end_to_end() {
    let f = Fixture::new();
    let (model, _) = init();

    let (model, effects) = f
        .app
        .step(model, Msg::UserAction(UserAction::InputTestData))
        .unwrap();
    assert_eq!(effects, vec![Effect::LoadSample]);
    f.app.execute_effect(Effect::LoadSample);
    let msg = f.app.recv().unwrap();
    let (model, _) = f.app.step(model, msg).unwrap();
    assert_eq!(model.current_image.as_ref().unwrap().name(), "test1.jpg");

    let (model, mut effects) = f
        .app
        .step(model, Msg::UserAction(UserAction::RunInference))
        .unwrap();
    assert_eq!(effects.len(), 1);
    f.app.execute_effect(effects.remove(0));
    let msg = f.app.recv().unwrap();
    let (model, effects) = f.app.step(model, msg).unwrap();

    assert!(effects.is_empty());
    assert_eq!(model.inference, Inference::Idle);

    let display = f.device_display.lock().unwrap();
    let screen = display.last_screen().unwrap();
    assert_eq!(
        screen.result_text,
        "Label: dog, Score: 70.00%\nLabel: fish, Score: 70.00%\nLabel: cat, Score: 10.00%"
    );
    assert!(screen.run_enabled);
    assert_eq!(screen.preview.as_ref().unwrap().name(), "test1.jpg");

    assert_eq!(f.classifier_model.opened(), 1);
    assert_eq!(f.classifier_model.released(), 1);
}

#[test]
fn test_run_button_disabled_while_classifying() {
    let f = Fixture::new();
    let (model, _) = init();

    let (model, _) = f
        .app
        .step(model, Msg::UserAction(UserAction::ShowGallery))
        .unwrap();
    f.app.execute_effect(Effect::PickImage);
    let msg = f.app.recv().unwrap();
    let (model, _) = f.app.step(model, msg).unwrap();
    assert!(f.device_display.lock().unwrap().last_screen().unwrap().run_enabled);

    let _ = f
        .app
        .step(model, Msg::UserAction(UserAction::RunInference))
        .unwrap();

    let display = f.device_display.lock().unwrap();
    let screen = display.last_screen().unwrap();
    assert!(!screen.run_enabled);
    assert_eq!(screen.status, "Classifying picked.png...");
}

#[test]
fn test_model_load_failure_is_shown_and_nothing_leaks() {
    let f = Fixture::with(ImageSourceFake::new(), Vec::new(), |model| {
        model.failing_open("model asset missing")
    });
    let (model, _) = init();

    f.app.execute_effect(Effect::LoadImage {
        path: PathBuf::from("cat.png"),
    });
    let msg = f.app.recv().unwrap();
    let (model, _) = f.app.step(model, msg).unwrap();
    let (model, mut effects) = f
        .app
        .step(model, Msg::UserAction(UserAction::RunInference))
        .unwrap();
    f.app.execute_effect(effects.remove(0));
    let msg = f.app.recv().unwrap();
    let (model, _) = f.app.step(model, msg).unwrap();

    assert_eq!(model.inference, Inference::Idle);
    assert_eq!(
        model.status,
        "Classification failed: failed to load model: model asset missing"
    );
    assert_eq!(f.classifier_model.opened(), f.classifier_model.released());
}

#[test]
fn test_decode_failure_leaves_no_image() {
    let f = Fixture::with(ImageSourceFake::failing(), Vec::new(), |model| model);
    let (model, _) = init();

    f.app.execute_effect(Effect::LoadSample);
    let msg = f.app.recv().unwrap();
    let (model, _) = f.app.step(model, msg).unwrap();

    assert_eq!(model.current_image, None);
    assert!(model.status.starts_with("No image available"));

    let (_, effects) = f
        .app
        .step(model, Msg::UserAction(UserAction::RunInference))
        .unwrap();
    assert!(effects.is_empty());
}

#[test]
fn test_cancelled_picker_sends_empty_pick() {
    let f = Fixture::with(ImageSourceFake::cancelling(), Vec::new(), |model| model);

    f.app.execute_effect(Effect::PickImage);

    assert!(matches!(f.app.recv().unwrap(), Msg::ImagePicked(Ok(None))));
}

#[test]
fn test_user_input_is_forwarded() {
    let f = Fixture::with(
        ImageSourceFake::new(),
        vec![UserAction::InputTestData, UserAction::RunInference],
        |model| model,
    );

    // The fake input closes its channel after replaying, ending the subscription.
    f.app.execute_effect(Effect::SubscribeUserInput);

    assert!(matches!(
        f.app.recv().unwrap(),
        Msg::UserAction(UserAction::InputTestData)
    ));
    assert!(matches!(
        f.app.recv().unwrap(),
        Msg::UserAction(UserAction::RunInference)
    ));
}

#[test]
fn test_run_loop_exits_on_quit_and_shuts_down() {
    let f = Fixture::with(
        ImageSourceFake::new(),
        vec![UserAction::InputTestData, UserAction::Quit],
        |model| model,
    );

    f.app.run().unwrap();

    let display = f.device_display.lock().unwrap();
    assert_eq!(display.last_screen().unwrap().status, "Exiting");
}
