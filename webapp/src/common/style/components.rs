pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: none;
  outline: none;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover:not(:disabled) {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

.btn-secondary:hover:not(:disabled) {
  background-color: var(--neutral-300);
}

.btn-danger {
  background-color: var(--error);
  color: var(--text-inverse);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

/* Pills, used for tags and pivots */
.pill {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--neutral-200);
  color: var(--text-secondary);
  font-size: 0.875rem;
  cursor: pointer;
  border: none;
}

.pill:hover {
  background-color: var(--primary-light);
  color: var(--text-inverse);
}

.pill-count {
  margin-left: var(--space-2);
  opacity: 0.7;
}

/* Forms */
.form-group {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  margin-bottom: var(--space-4);
}

.form-label {
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  font-size: 1rem;
}

.form-input:focus {
  border-color: var(--primary);
  outline: none;
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-6);
}

.status-message {
  color: var(--text-tertiary);
}

.error-message {
  color: var(--error);
}
"#;
