use std::sync::Arc;

use iced::Task;
use pase_session::{ProfileStore, ProfileUpdate};
use uuid::Uuid;

use crate::app::{App, AppEvent};
use crate::routers::toast::notify;
use crate::services::fetch_avatar;
use crate::widgets::account::model::ProfileField;
use crate::widgets::account::{AccountCommand, AccountEffect, AccountEvent};

const NO_PROFILE_MESSAGE: &str = "No profile found";

/// Route an account UI event through the widget reducer.
pub(crate) fn route_event(app: &mut App, event: AccountEvent) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route an account command directly (used by the menu and navigation
/// routers).
pub(crate) fn route_command(
    app: &mut App,
    command: AccountCommand,
) -> Task<AppEvent> {
    app.widgets.account.reduce(command).map(AppEvent::AccountEffect)
}

/// Route an account effect event to app-level tasks.
pub(crate) fn route_effect(app: &mut App, effect: AccountEffect) -> Task<AppEvent> {
    match effect {
        AccountEffect::LoadRequested { generation } => {
            load_profile(app, generation)
        },
        AccountEffect::UpdateRequested {
            generation,
            id,
            field,
            update,
        } => update_profile(app, generation, id, field, update),
        AccountEffect::FetchAvatar { url } => fetch_preview(app, url),
        AccountEffect::Notify(notice) => notify(notice),
    }
}

fn load_profile(app: &App, generation: u64) -> Task<AppEvent> {
    let profiles = app.services.profiles.clone();
    Task::perform(select_profile(profiles, generation), AppEvent::AccountUi)
}

async fn select_profile(
    profiles: Arc<dyn ProfileStore>,
    generation: u64,
) -> AccountEvent {
    match profiles.select().await.map(|rows| rows.into_iter().next()) {
        Ok(Some(profile)) => AccountEvent::Loaded {
            generation,
            profile,
        },
        Ok(None) => AccountEvent::LoadFailed {
            generation,
            message: String::from(NO_PROFILE_MESSAGE),
        },
        Err(err) => AccountEvent::LoadFailed {
            generation,
            message: err.to_string(),
        },
    }
}

fn update_profile(
    app: &App,
    generation: u64,
    id: Uuid,
    field: ProfileField,
    update: ProfileUpdate,
) -> Task<AppEvent> {
    let profiles = app.services.profiles.clone();
    Task::perform(
        async move { profiles.update(id, update).await },
        move |result| match result {
            Ok(profile) => AppEvent::AccountUi(AccountEvent::Saved {
                generation,
                field,
                profile,
            }),
            Err(err) => AppEvent::AccountUi(AccountEvent::SaveFailed {
                generation,
                field,
                message: err.to_string(),
            }),
        },
    )
}

fn fetch_preview(app: &App, url: String) -> Task<AppEvent> {
    let http = app.services.http.clone();
    Task::perform(fetch_avatar(http, url.clone()), move |result| {
        match result {
            Ok(bytes) => {
                AppEvent::AccountUi(AccountEvent::AvatarFetched { url, bytes })
            },
            Err(err) => AppEvent::AccountUi(AccountEvent::AvatarFetchFailed {
                url,
                message: err.to_string(),
            }),
        }
    })
}

fn map_event_to_command(event: AccountEvent) -> AccountCommand {
    use {AccountCommand as C, AccountEvent as E};

    match event {
        E::NameChanged(value) => C::NameChanged(value),
        E::AvatarSelected(variant) => C::AvatarSelected(variant),
        E::SaveName => C::SaveName,
        E::SaveAvatar => C::SaveAvatar,
        E::Loaded {
            generation,
            profile,
        } => C::Loaded {
            generation,
            profile,
        },
        E::LoadFailed {
            generation,
            message,
        } => C::LoadFailed {
            generation,
            message,
        },
        E::Saved {
            generation,
            field,
            profile,
        } => C::Saved {
            generation,
            field,
            profile,
        },
        E::SaveFailed {
            generation,
            field,
            message,
        } => C::SaveFailed {
            generation,
            field,
            message,
        },
        E::AvatarFetched { url, bytes } => C::AvatarFetched { url, bytes },
        E::AvatarFetchFailed { url, message } => {
            C::AvatarFetchFailed { url, message }
        },
    }
}

#[cfg(test)]
mod tests {
    use pase_session::{
        AvatarVariant, Credentials, MemoryBackend, Profile, SessionBackend,
        SignIn,
    };
    use secrecy::SecretString;

    use super::*;
    use crate::config::AppConfig;

    async fn signed_in_backend() -> Arc<MemoryBackend> {
        let backend = Arc::new(MemoryBackend::new());
        let credentials = Credentials::new(
            "ada@example.com",
            SecretString::from(String::from("secret1")),
        );
        backend
            .sign_up(credentials.clone())
            .await
            .expect("sign up should succeed");
        backend
            .sign_in(SignIn::Password(credentials))
            .await
            .expect("sign in should succeed");
        backend
    }

    #[test]
    fn given_load_when_profile_arrives_then_form_shows_profile() {
        let (mut app, _) = App::new(AppConfig::default());

        let _ = route_command(&mut app, AccountCommand::Load);
        assert!(app.widgets.account.vm().loading);

        let _ = route_event(
            &mut app,
            AccountEvent::Loaded {
                generation: 1,
                profile: Profile {
                    id: Uuid::from_u128(3),
                    full_name: String::from("Ada"),
                    avatar_type: AvatarVariant::Marble,
                },
            },
        );

        let vm = app.widgets.account.vm();
        assert!(vm.loaded);
        assert_eq!(vm.name_draft, "Ada");
        assert_eq!(vm.avatar_draft, AvatarVariant::Marble);
        assert!(!vm.can_save_name);
    }

    #[test]
    fn given_page_left_when_load_fails_late_then_it_is_ignored() {
        let (mut app, _) = App::new(AppConfig::default());
        let _ = route_command(&mut app, AccountCommand::Load);
        let _ = route_command(&mut app, AccountCommand::Unload);

        let _ = route_event(
            &mut app,
            AccountEvent::LoadFailed {
                generation: 1,
                message: String::from(NO_PROFILE_MESSAGE),
            },
        );

        let vm = app.widgets.account.vm();
        assert!(!vm.loading);
        assert!(!vm.loaded);
    }

    #[tokio::test]
    async fn given_signed_in_backend_when_loading_then_profile_is_shown() {
        let backend = signed_in_backend().await;
        let (mut app, _) = App::new(AppConfig::default());
        app.services.profiles = backend as Arc<dyn ProfileStore>;
        let _ = route_command(&mut app, AccountCommand::Load);

        let event = select_profile(app.services.profiles.clone(), 1).await;
        let _ = route_event(&mut app, event);

        let vm = app.widgets.account.vm();
        assert!(vm.loaded);
        assert!(!vm.loading);
    }

    #[tokio::test]
    async fn given_failing_profile_store_when_loading_then_form_stays_unloaded()
    {
        let backend = signed_in_backend().await;
        backend.fail_profiles("profile service is down");
        let (mut app, _) = App::new(AppConfig::default());
        app.services.profiles = backend as Arc<dyn ProfileStore>;
        let _ = route_command(&mut app, AccountCommand::Load);

        let event = select_profile(app.services.profiles.clone(), 1).await;

        assert!(matches!(
            &event,
            AccountEvent::LoadFailed { generation: 1, message }
                if message == "profile service is down"
        ));
        let _ = route_event(&mut app, event);
        let vm = app.widgets.account.vm();
        assert!(!vm.loading);
        assert!(!vm.loaded);
    }
}
