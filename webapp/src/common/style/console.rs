pub const CONSOLE_STYLES: &str = r#"
/* Tag cloud */
.top-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-bottom: var(--space-6);
}

.top-tag {
  padding: var(--space-2) var(--space-4);
  font-size: 1rem;
  background-color: var(--primary);
  color: var(--text-inverse);
}

.tag-cloud {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: var(--space-2) var(--space-4);
  padding: var(--space-6);
}

.cloud-word {
  cursor: pointer;
  font-weight: 600;
  line-height: 1.1;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.cloud-word:hover {
  transform: scale(1.1);
}

.cloud-filter {
  width: 100%;
  margin-bottom: var(--space-4);
}

/* Gallery */
.gallery-header {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(var(--thumb-size), 1fr));
  gap: var(--space-3);
}

.gallery-tile {
  aspect-ratio: 1;
  border-radius: var(--radius-md);
  overflow: hidden;
  background-color: var(--neutral-200);
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
}

.gallery-tile img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.gallery-footer {
  display: flex;
  justify-content: center;
  padding: var(--space-6);
}

/* Detail modal */
.modal {
  position: fixed;
  inset: 0;
  z-index: 20;
  background-color: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
}

.modal-content {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  width: min(1100px, 95vw);
  max-height: 92vh;
  overflow-y: auto;
  padding: var(--space-6);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-4);
}

.modal-close {
  cursor: pointer;
  font-size: 1.5rem;
  color: var(--text-tertiary);
}

.detail-body {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: var(--space-6);
}

.detail-image {
  position: relative;
  align-self: start;
}

.detail-image img {
  display: block;
  width: 100%;
  border-radius: var(--radius-md);
}

.face-box {
  position: absolute;
  border: 2px solid var(--accent);
  border-radius: var(--radius-sm);
}

.face-box:hover {
  border-color: var(--warning);
}

.face-popup {
  position: absolute;
  top: 100%;
  left: 0;
  margin-top: var(--space-1);
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-1);
  min-width: 160px;
  padding: var(--space-2);
  background-color: var(--surface);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-md);
  z-index: 1;
}

.detail-labels {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.detail-table {
  width: 100%;
  border-collapse: collapse;
  font-size: 0.875rem;
}

.detail-table td {
  padding: var(--space-1) var(--space-2);
  border-bottom: 1px solid var(--border);
  word-break: break-word;
}

.detail-table td:first-child {
  color: var(--text-tertiary);
  white-space: nowrap;
}

.pivot-link {
  color: var(--primary);
  cursor: pointer;
}

.pivot-link:hover {
  text-decoration: underline;
}

/* Profile */
.profile-layout {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-6);
}

.avatar {
  width: 96px;
  height: 96px;
  border-radius: var(--radius-full);
  object-fit: cover;
  background-color: var(--neutral-200);
}

.storage-bar {
  height: 10px;
  border-radius: var(--radius-full);
  background-color: var(--neutral-200);
  overflow: hidden;
  margin: var(--space-2) 0;
}

.storage-fill {
  height: 100%;
  background-color: var(--primary);
}

.stats-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.stat-value {
  font-size: 1.75rem;
  font-weight: 600;
}

.stats-list {
  list-style: none;
}

.stats-list li {
  display: flex;
  justify-content: space-between;
  padding: var(--space-1) 0;
}
"#;
