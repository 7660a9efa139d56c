pub const CSS_VARIABLES: &str = r#"
:root {
  /* Palette */
  --primary: #4F46E5;
  --primary-light: #818CF8;
  --primary-dark: #4338CA;
  --accent: #0EA5E9;

  --neutral-50: #F8FAFC;
  --neutral-100: #F1F5F9;
  --neutral-200: #E2E8F0;
  --neutral-300: #CBD5E1;
  --neutral-500: #64748B;
  --neutral-700: #334155;
  --neutral-900: #0F172A;

  --success: #10B981;
  --warning: #F59E0B;
  --error: #EF4444;

  --background: var(--neutral-100);
  --surface: #FFFFFF;
  --overlay: rgba(15, 23, 42, 0.75);

  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  --border: var(--neutral-200);

  /* Layout */
  --header-height: 60px;
  --container-width: 1280px;
  --thumb-size: 180px;

  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 10px;
  --radius-full: 9999px;

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 20px 25px -5px rgba(0, 0, 0, 0.2);

  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
