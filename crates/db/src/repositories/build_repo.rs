//! Repository for the `builds` table and its owned `parts` and `images`.
//!
//! Every write that touches more than one row runs in a single transaction.
//! Early returns via `?` drop the transaction uncommitted, which rolls it
//! back before the error reaches the caller.

use futures::stream::BoxStream;
use futures::TryStreamExt;
use pcshowdown_core::permission::Permission;
use pcshowdown_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::error::StoreError;
use crate::models::build::{
    BuildRow, BuildSummary, CreateBuild, CreatedBuild, FullBuild, UpdateBuild,
};
use crate::models::image::{Image, NewImage};
use crate::models::part::{NewPart, Part};
use crate::repositories::LinkRepo;

const PART_COLUMNS: &str =
    "id AS part_id, type AS part_type, brand, model, qty, build_id AS pc_id";

const IMAGE_COLUMNS: &str = "id AS image_id, link, build_id AS pc_id";

/// Create, read, replace, and delete builds addressed by link token.
pub struct BuildRepo;

impl BuildRepo {
    /// Insert a build with its parts, images, and a fresh edit/view link pair.
    ///
    /// All rows are written in one transaction; on any failure nothing is
    /// persisted.
    pub async fn create(pool: &PgPool, input: &CreateBuild) -> Result<CreatedBuild, StoreError> {
        let mut tx = pool.begin().await?;

        let build_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO builds (name, info) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.info)
        .fetch_one(&mut *tx)
        .await?;

        insert_parts(&mut tx, build_id, &input.parts).await?;
        insert_images(&mut tx, build_id, &input.images).await?;
        let links = LinkRepo::create_pair(&mut tx, build_id).await?;

        tx.commit().await?;
        Ok(CreatedBuild {
            pc_id: build_id,
            links,
        })
    }

    /// Stream one page of the public listing.
    ///
    /// Yields builds with `id > after_id` in ascending id order, at most
    /// `limit` of them, each paired with its view token. The stream is lazy
    /// and cannot be resumed; request the next page with the last `pc_id`
    /// seen.
    pub fn stream_after(
        pool: &PgPool,
        after_id: DbId,
        limit: i64,
    ) -> BoxStream<'_, Result<BuildSummary, sqlx::Error>> {
        sqlx::query_as::<_, BuildSummary>(
            "SELECT b.id AS pc_id, b.name, b.info, l.token AS view_id
             FROM builds b
             INNER JOIN links l ON l.build_id = b.id AND l.permission = $3::link_permission
             WHERE b.id > $1
             ORDER BY b.id ASC
             LIMIT $2",
        )
        .bind(after_id)
        .bind(limit)
        .bind(Permission::View.as_str())
        .fetch(pool)
    }

    /// Collect one page of the public listing. See [`BuildRepo::stream_after`].
    pub async fn list_after(
        pool: &PgPool,
        after_id: DbId,
        limit: i64,
    ) -> Result<Vec<BuildSummary>, StoreError> {
        let page: Vec<BuildSummary> = Self::stream_after(pool, after_id, limit)
            .try_collect()
            .await?;
        Ok(page)
    }

    /// Fetch the full build addressed by `token`. Edit and view tokens both
    /// grant read access.
    ///
    /// All reads share one repeatable-read snapshot, so a concurrent write
    /// is seen either entirely or not at all.
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<FullBuild, StoreError> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let build = load_build(&mut tx, token)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                token: token.to_string(),
            })?;

        tx.commit().await?;
        Ok(build)
    }

    /// Replace a build's name, info, parts, and images.
    ///
    /// Requires an edit token. An unknown token and a view token are
    /// indistinguishable here and both fail with [`StoreError::Forbidden`].
    /// Concurrent replacements of the same build are last-write-wins.
    pub async fn update(
        pool: &PgPool,
        token: &str,
        input: &UpdateBuild,
    ) -> Result<FullBuild, StoreError> {
        let mut tx = pool.begin().await?;

        let build_id = LinkRepo::edit_build_id_in(&mut tx, token)
            .await?
            .ok_or(StoreError::Forbidden)?;

        let updated = sqlx::query("UPDATE builds SET name = $1, info = $2 WHERE id = $3")
            .bind(&input.name)
            .bind(&input.info)
            .bind(build_id)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            // Deleted between resolution and update.
            return Err(StoreError::Forbidden);
        }

        sqlx::query("DELETE FROM parts WHERE build_id = $1")
            .bind(build_id)
            .execute(&mut *tx)
            .await?;
        insert_parts(&mut tx, build_id, &input.parts).await?;

        sqlx::query("DELETE FROM images WHERE build_id = $1")
            .bind(build_id)
            .execute(&mut *tx)
            .await?;
        insert_images(&mut tx, build_id, &input.images).await?;

        tx.commit().await?;

        Self::find_by_token(pool, token).await
    }

    /// Delete the build addressed by an edit token. Parts, images, and both
    /// links go with it via `ON DELETE CASCADE`.
    ///
    /// Returns the id of the removed build. Zero affected rows (unknown token
    /// or view token) is reported as [`StoreError::Forbidden`].
    pub async fn delete(pool: &PgPool, token: &str) -> Result<DbId, StoreError> {
        sqlx::query_scalar::<_, DbId>(
            "DELETE FROM builds WHERE id IN (
                SELECT build_id FROM links WHERE token = $1 AND permission = $2::link_permission
             )
             RETURNING id",
        )
        .bind(token)
        .bind(Permission::Edit.as_str())
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::Forbidden)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load everything visible through `token`. `None` if the token is unknown.
async fn load_build(
    conn: &mut PgConnection,
    token: &str,
) -> Result<Option<FullBuild>, sqlx::Error> {
    let Some(resolved) = LinkRepo::resolve_in(conn, token).await? else {
        return Ok(None);
    };

    let row = sqlx::query_as::<_, BuildRow>("SELECT id, name, info FROM builds WHERE id = $1")
        .bind(resolved.build_id)
        .fetch_one(&mut *conn)
        .await?;

    let parts = sqlx::query_as::<_, Part>(&format!(
        "SELECT {PART_COLUMNS} FROM parts WHERE build_id = $1 ORDER BY id ASC"
    ))
    .bind(row.id)
    .fetch_all(&mut *conn)
    .await?;

    let images = sqlx::query_as::<_, Image>(&format!(
        "SELECT {IMAGE_COLUMNS} FROM images WHERE build_id = $1 ORDER BY id ASC"
    ))
    .bind(row.id)
    .fetch_all(&mut *conn)
    .await?;

    let links = LinkRepo::pair_for(conn, &resolved, token).await?;

    Ok(Some(FullBuild {
        pc_id: row.id,
        name: row.name,
        info: row.info,
        parts,
        images,
        links,
    }))
}

/// Bulk-insert parts for a build using `UNNEST`.
async fn insert_parts(
    conn: &mut PgConnection,
    build_id: DbId,
    parts: &[NewPart],
) -> Result<(), sqlx::Error> {
    if parts.is_empty() {
        return Ok(());
    }

    let types: Vec<&str> = parts.iter().map(|p| p.part_type.as_str()).collect();
    let brands: Vec<&str> = parts.iter().map(|p| p.brand.as_str()).collect();
    let models: Vec<&str> = parts.iter().map(|p| p.model.as_str()).collect();
    let qtys: Vec<i32> = parts.iter().map(|p| p.qty).collect();

    sqlx::query(
        "INSERT INTO parts (type, brand, model, qty, build_id)
         SELECT t.type, t.brand, t.model, t.qty, $5
         FROM UNNEST($1::text[], $2::text[], $3::text[], $4::int4[])
             WITH ORDINALITY AS t(type, brand, model, qty, ord)
         ORDER BY t.ord",
    )
    .bind(&types)
    .bind(&brands)
    .bind(&models)
    .bind(&qtys)
    .bind(build_id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Bulk-insert image links for a build using `UNNEST`.
async fn insert_images(
    conn: &mut PgConnection,
    build_id: DbId,
    images: &[NewImage],
) -> Result<(), sqlx::Error> {
    if images.is_empty() {
        return Ok(());
    }

    let links: Vec<&str> = images.iter().map(|i| i.link.as_str()).collect();

    sqlx::query(
        "INSERT INTO images (link, build_id)
         SELECT t.link, $2
         FROM UNNEST($1::text[]) WITH ORDINALITY AS t(link, ord)
         ORDER BY t.ord",
    )
    .bind(&links)
    .bind(build_id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
