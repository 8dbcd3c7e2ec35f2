//! Service 层 CRUD 集成测试

mod common;

use common::setup_db;
use starwars_api::ApiError;
use starwars_api::api::services::{
    CreateFavoriteRequest, CreatePersonRequest, CreatePlanetRequest, CreateUserRequest,
    FavoritesService, PeopleService, PlanetsService, UpdateFavoritePersonRequest,
    UpdateFavoritePlanetRequest, UpdatePersonRequest, UpdateUserRequest, UsersService,
};

fn user_request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        first_name: "Padme".to_string(),
        last_name: "Amidala".to_string(),
        email: email.to_string(),
        password: "naboo".to_string(),
        is_active: true,
    }
}

fn person_request(name: &str) -> CreatePersonRequest {
    CreatePersonRequest {
        name: name.to_string(),
        gender: "female".to_string(),
        height: 165,
        mass: 45,
        hair_color: "brown".to_string(),
        skin_color: "light".to_string(),
        eye_color: "brown".to_string(),
        birth_year: "46BBY".to_string(),
    }
}

fn planet_request(name: &str) -> CreatePlanetRequest {
    CreatePlanetRequest {
        name: name.to_string(),
        diameter: 12120,
        rotation_period: 26,
        orbital_period: 312,
        gravity: "1 standard".to_string(),
        population: 4_500_000,
        climate: "temperate".to_string(),
        terrain: "grassy hills".to_string(),
        surface_water: 12,
    }
}

#[tokio::test]
async fn user_crud_round() {
    let db = setup_db().await;
    let service = UsersService::new(&db);

    let created = service
        .create(&user_request("padme@naboo.gov"))
        .await
        .expect("create user");
    assert_eq!(created.first_name, "Padme");

    let updated = service
        .update(
            created.id,
            &UpdateUserRequest {
                email: Some("queen@naboo.gov".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update user");
    assert_eq!(updated.email, "queen@naboo.gov");
    assert_eq!(updated.first_name, "Padme");
    assert_eq!(updated.password, "naboo");

    assert_eq!(service.list().await.unwrap().len(), 1);

    service.delete(created.id).await.expect("delete user");
    assert!(service.get(created.id).await.unwrap_err().is_not_found());
    assert!(service.delete(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn duplicate_person_name_is_conflict() {
    let db = setup_db().await;
    let service = PeopleService::new(&db);

    service.create(&person_request("Padme")).await.unwrap();
    let err = service.create(&person_request("Padme")).await.unwrap_err();
    assert!(matches!(err.root(), ApiError::Conflict { .. }), "{err}");
}

#[tokio::test]
async fn person_update_with_no_fields_is_noop() {
    let db = setup_db().await;
    let service = PeopleService::new(&db);

    let created = service.create(&person_request("Yoda")).await.unwrap();
    let same = service
        .update(created.id, &UpdatePersonRequest::default())
        .await
        .unwrap();
    assert_eq!(same, created);
}

#[tokio::test]
async fn favorites_store_operations() {
    let db = setup_db().await;
    let users = UsersService::new(&db);
    let people = PeopleService::new(&db);
    let planets = PlanetsService::new(&db);
    let favorites = FavoritesService::new(&db);

    let padme = users.create(&user_request("padme@naboo.gov")).await.unwrap();
    let anakin = users.create(&user_request("ani@tatooine.net")).await.unwrap();
    let naboo = planets.create(&planet_request("Naboo")).await.unwrap();
    let coruscant = planets.create(&planet_request("Coruscant")).await.unwrap();
    let obi_wan = people.create(&person_request("Obi-Wan")).await.unwrap();

    let request = CreateFavoriteRequest { user_id: padme.id };
    let fav_planet = favorites.add_planet(naboo.id, &request).await.unwrap();
    let fav_person = favorites.add_person(obi_wan.id, &request).await.unwrap();

    let listed = favorites.list_for_user(padme.id).await.unwrap();
    assert_eq!(listed.planets.len(), 1);
    assert_eq!(listed.people.len(), 1);
    assert_eq!(listed.people[0].person.as_ref().unwrap().name, "Obi-Wan");

    assert_eq!(favorites.list_planets().await.unwrap().len(), 1);
    assert_eq!(favorites.list_people().await.unwrap().len(), 1);

    // 重新指向另一颗星球和另一个用户
    let moved = favorites
        .update_planet(
            fav_planet.favorite.id,
            &UpdateFavoritePlanetRequest {
                user_id: Some(anakin.id),
                planet_id: Some(coruscant.id),
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.planet.unwrap().name, "Coruscant");
    assert_eq!(moved.user.unwrap().id, anakin.id);
    assert!(favorites.list_for_user(padme.id).await.unwrap().planets.is_empty());

    let fetched = favorites.get_person(fav_person.favorite.id).await.unwrap();
    assert_eq!(fetched.user.unwrap().id, padme.id);

    let unchanged = favorites
        .update_person(
            fav_person.favorite.id,
            &UpdateFavoritePersonRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(unchanged.favorite, fav_person.favorite);

    favorites.delete_planet(fav_planet.favorite.id).await.unwrap();
    assert!(favorites
        .get_planet(fav_planet.favorite.id)
        .await
        .unwrap_err()
        .is_not_found());

    favorites.remove_person(obi_wan.id).await.unwrap();
    assert!(favorites.remove_person(obi_wan.id).await.unwrap_err().is_not_found());
    assert!(favorites.delete_person(fav_person.favorite.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn favorite_conflict_names_global_uniqueness() {
    let db = setup_db().await;
    let users = UsersService::new(&db);
    let planets = PlanetsService::new(&db);
    let favorites = FavoritesService::new(&db);

    let first = users.create(&user_request("one@rebels.org")).await.unwrap();
    let second = users.create(&user_request("two@rebels.org")).await.unwrap();
    let hoth = planets.create(&planet_request("Hoth")).await.unwrap();

    favorites
        .add_planet(hoth.id, &CreateFavoriteRequest { user_id: first.id })
        .await
        .unwrap();
    let err = favorites
        .add_planet(hoth.id, &CreateFavoriteRequest { user_id: second.id })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Conflict { .. }));
    assert!(err.to_string().contains("全局唯一"));
    // 冲突来自唯一约束本身，而不是写入前的查询
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn moving_favorite_onto_taken_target_names_global_uniqueness() {
    let db = setup_db().await;
    let users = UsersService::new(&db);
    let planets = PlanetsService::new(&db);
    let people = PeopleService::new(&db);
    let favorites = FavoritesService::new(&db);

    let owner = users.create(&user_request("owner@rebels.org")).await.unwrap();
    let hoth = planets.create(&planet_request("Hoth")).await.unwrap();
    let endor = planets.create(&planet_request("Endor")).await.unwrap();
    let request = CreateFavoriteRequest { user_id: owner.id };

    favorites.add_planet(hoth.id, &request).await.unwrap();
    let on_endor = favorites.add_planet(endor.id, &request).await.unwrap();

    let err = favorites
        .update_planet(
            on_endor.favorite.id,
            &UpdateFavoritePlanetRequest {
                user_id: None,
                planet_id: Some(hoth.id),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict { .. }), "{err}");
    assert!(err.to_string().contains("favorites_planets.planet_id 全局唯一"));

    let yoda = people.create(&person_request("Yoda")).await.unwrap();
    let luke = people.create(&person_request("Luke")).await.unwrap();
    favorites.add_person(yoda.id, &request).await.unwrap();
    let on_luke = favorites.add_person(luke.id, &request).await.unwrap();

    let err = favorites
        .update_person(
            on_luke.favorite.id,
            &UpdateFavoritePersonRequest {
                user_id: None,
                people_id: Some(yoda.id),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict { .. }), "{err}");
    assert!(err.to_string().contains("favorites_people.people_id 全局唯一"));
}
